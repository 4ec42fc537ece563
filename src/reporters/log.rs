//! # LogReporter — route task failures into `tracing`
//!
//! Each message becomes one `ERROR` event with target `taskgroup`.
//!
//! ## Example output
//! ```text
//! ERROR taskgroup: filestream input: open /var/log/app.log: permission denied
//! ```

use crate::reporters::ReportError;

/// Reporter that emits each failure as a `tracing::error!` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl LogReporter {
    /// Construct a new [`LogReporter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReportError for LogReporter {
    fn report(&self, message: &str) {
        tracing::error!(target: "taskgroup", "{message}");
    }

    fn name(&self) -> &'static str {
        "LogReporter"
    }
}
