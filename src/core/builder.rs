use std::sync::Arc;

use crate::core::{config::GroupConfig, group::Group};
use crate::reporters::{LogReporter, ReportError};

/// Builder for constructing a [`Group`] from a [`GroupConfig`].
///
/// Without an explicit reporter, failures go to [`LogReporter`].
pub struct GroupBuilder {
    cfg: GroupConfig,
    reporter: Option<Arc<dyn ReportError>>,
}

impl GroupBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: GroupConfig) -> Self {
        Self {
            cfg,
            reporter: None,
        }
    }

    /// Sets the reporter receiving task failures.
    pub fn with_reporter(mut self, reporter: Arc<dyn ReportError>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Overrides [`GroupConfig::error_prefix`].
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cfg.error_prefix = prefix.into();
        self
    }

    /// Builds a live group.
    pub fn build(self) -> Group {
        let reporter: Arc<dyn ReportError> = match self.reporter {
            Some(reporter) => reporter,
            None => Arc::new(LogReporter::new()),
        };
        Group::new(
            self.cfg.concurrency_limit(),
            self.cfg.stop_timeout,
            reporter,
            self.cfg.error_prefix,
        )
    }
}
