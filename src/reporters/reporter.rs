//! # Core reporter trait
//!
//! `ReportError` is the extension point for routing task failures somewhere an
//! operator can see them (log stream, metrics counter, alerting hook).
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use taskgroup::ReportError;
//!
//! #[derive(Default)]
//! struct FailureCounter(AtomicU64);
//!
//! impl ReportError for FailureCounter {
//!     fn report(&self, _message: &str) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//! ```

/// Contract for task failure reporters.
pub trait ReportError: Send + Sync + 'static {
    /// Records one pre-formatted failure message.
    fn report(&self, message: &str);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Formats a task failure the way every reporter receives it.
///
/// An empty prefix yields the error text alone.
pub(crate) fn format_failure(prefix: &str, error: &dyn std::fmt::Display) -> String {
    if prefix.is_empty() {
        error.to_string()
    } else {
        format!("{prefix}: {error}")
    }
}
