//! # Task group configuration.
//!
//! Provides [`GroupConfig`], the settings an input hands to
//! [`Group::builder`](crate::Group::builder).
//!
//! ## Sentinel values
//! - `max_concurrent = 0` → unlimited (capped at [`Semaphore::MAX_PERMITS`])
//! - `stop_timeout = 0s` → `stop()` does not wait for running tasks at all

use std::time::Duration;

use tokio::sync::Semaphore;

/// Settings for one task group.
///
/// ## Field semantics
/// - `max_concurrent`: maximum number of tasks running at once (`0` = unlimited)
/// - `stop_timeout`: how long `stop()` waits for running tasks (`0s` = no wait)
/// - `error_prefix`: label prepended to every reported task failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupConfig {
    /// Maximum number of tasks to run concurrently.
    ///
    /// - `0` = unlimited
    /// - `n > 0` = at most `n` tasks run simultaneously; further submissions wait
    pub max_concurrent: usize,

    /// Maximum time `stop()` waits for in-flight tasks to return.
    ///
    /// Tasks still running afterwards are left alone; `stop()` reports
    /// [`GroupError::StopTimeout`](crate::GroupError::StopTimeout).
    pub stop_timeout: Duration,

    /// Label identifying the group in reported failures, e.g. the input type.
    ///
    /// Empty means failures are reported with the task's error text only.
    pub error_prefix: String,
}

impl GroupConfig {
    /// Returns the number of admission units the group is built with.
    ///
    /// `0` and anything above [`Semaphore::MAX_PERMITS`] map to `MAX_PERMITS`.
    #[inline]
    pub fn concurrency_limit(&self) -> usize {
        match self.max_concurrent {
            0 => Semaphore::MAX_PERMITS,
            n => n.min(Semaphore::MAX_PERMITS),
        }
    }

    /// True when no concurrency cap was requested.
    #[inline]
    pub fn is_unlimited(&self) -> bool {
        self.max_concurrent == 0
    }
}

impl Default for GroupConfig {
    /// Default configuration:
    ///
    /// - `max_concurrent = 0` (unlimited)
    /// - `stop_timeout = 30s`
    /// - `error_prefix = ""`
    fn default() -> Self {
        Self {
            max_concurrent: 0,
            stop_timeout: Duration::from_secs(30),
            error_prefix: String::new(),
        }
    }
}
