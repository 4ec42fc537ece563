//! Error types used by the task group and by the tasks it runs.
//!
//! This module defines two main error enums:
//!
//! - [`GroupError`] — errors returned synchronously by [`Group`](crate::Group) operations.
//! - [`TaskError`] — errors returned by task bodies; never returned to the submitter,
//!   only forwarded to the group's [`ReportError`](crate::ReportError).
//!
//! Both types provide `as_label` for logs/metrics.

use std::fmt::Display;
use std::time::Duration;

use thiserror::Error;

/// # Errors produced by the task group.
///
/// Only two things can go wrong synchronously: admission is refused because the
/// group is stopping, or the drain performed by [`Group::stop`](crate::Group::stop)
/// runs past its deadline.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// The lifecycle signal has fired; the group no longer admits tasks.
    #[error("task group is stopping: context canceled")]
    Canceled,

    /// In-flight tasks did not finish within the stop timeout.
    ///
    /// The remaining tasks keep running in the background; they were asked to
    /// stop but not terminated.
    #[error("timeout {timeout:?} while waiting for tasks to finish: deadline exceeded ({in_flight} still running)")]
    StopTimeout {
        /// The configured stop timeout.
        timeout: Duration,
        /// Number of tasks still in flight when the deadline passed.
        in_flight: usize,
    },
}

impl GroupError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use taskgroup::GroupError;
    ///
    /// let err = GroupError::StopTimeout { timeout: Duration::from_millis(1), in_flight: 3 };
    /// assert_eq!(err.as_label(), "group_stop_timeout");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            GroupError::Canceled => "group_canceled",
            GroupError::StopTimeout { .. } => "group_stop_timeout",
        }
    }

    /// True when admission was refused because the group is stopping.
    pub fn is_canceled(&self) -> bool {
        matches!(self, GroupError::Canceled)
    }

    /// True when the stop drain exceeded its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, GroupError::StopTimeout { .. })
    }
}

/// # Errors produced by task bodies.
///
/// The group never inspects these beyond formatting them for the reporter.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TaskError {
    /// Task execution failed.
    #[error("{error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// I/O failure while working on the source (open, read, stat...).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Task gave up because the lifecycle signal fired.
    #[error("context canceled")]
    Canceled,

    /// Task body panicked; produced by the group, not by tasks.
    #[error("task panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text.
        info: String,
    },
}

impl TaskError {
    /// Builds a [`TaskError::Fail`] from anything printable.
    ///
    /// ```
    /// use taskgroup::TaskError;
    ///
    /// let err = TaskError::fail("file truncated");
    /// assert_eq!(err.to_string(), "file truncated");
    /// ```
    pub fn fail(error: impl Display) -> Self {
        TaskError::Fail {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
            TaskError::Io(_) => "task_io",
            TaskError::Canceled => "task_canceled",
            TaskError::Panicked { .. } => "task_panicked",
        }
    }
}
