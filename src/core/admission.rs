//! # Admission slot.
//!
//! An [`Admission`] is proof that a task holds one unit of the group's gate.
//! While it lives the task counts as in flight; dropping it decrements the
//! count and then returns the unit, in that order, so the in-flight count
//! never exceeds the gate's capacity.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::OwnedSemaphorePermit;

/// One admitted task's hold on the gate.
pub(crate) struct Admission {
    in_flight: Arc<AtomicUsize>,
    // Declared last: released after the counter is decremented.
    _permit: OwnedSemaphorePermit,
}

impl Admission {
    pub(crate) fn new(permit: OwnedSemaphorePermit, in_flight: &Arc<AtomicUsize>) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self {
            in_flight: Arc::clone(in_flight),
            _permit: permit,
        }
    }
}

impl Drop for Admission {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
