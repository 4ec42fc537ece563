//! # MemoryReporter — keep task failures in memory
//!
//! Useful for tests and for embedders that surface recent failures elsewhere
//! (status endpoints, diagnostics bundles). Messages are stored one per entry
//! in arrival order.

use std::sync::{Mutex, MutexGuard};

use crate::reporters::ReportError;

/// Thread-safe, append-only store of reported messages.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    inner: Mutex<Vec<String>>,
}

impl MemoryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every message reported so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// All messages joined with `\n`, each terminated by a newline.
    #[must_use]
    pub fn contents(&self) -> String {
        let guard = self.lock();
        let mut out = String::with_capacity(guard.iter().map(|m| m.len() + 1).sum());
        for msg in guard.iter() {
            out.push_str(msg);
            out.push('\n');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A reporter that panicked mid-push still holds whole strings only.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ReportError for MemoryReporter {
    fn report(&self, message: &str) {
        self.lock().push(message.to_owned());
    }

    fn name(&self) -> &'static str {
        "MemoryReporter"
    }
}
