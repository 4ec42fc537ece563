//! # Task abstraction.
//!
//! A [`Task`] is consumed when the group admits it: [`Task::spawn`] turns it into
//! a future bound to the group's lifecycle signal. The group does not look at a
//! task's identity, only at how it completes.
//!
//! A task receives a [`CancellationToken`] and should check it to stop
//! cooperatively during shutdown. The group never aborts a running task.

use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::error::TaskError;

/// Boxed future produced by an admitted task.
pub type BoxTaskFuture = Pin<Box<dyn Future<Output = Result<(), TaskError>> + Send + 'static>>;

/// # One-shot, cancelable unit of work.
///
/// # Example
/// ```
/// use tokio_util::sync::CancellationToken;
/// use taskgroup::{BoxTaskFuture, Task, TaskError};
///
/// struct Harvester {
///     path: String,
/// }
///
/// impl Task for Harvester {
///     fn name(&self) -> &str {
///         &self.path
///     }
///
///     fn spawn(self: Box<Self>, ctx: CancellationToken) -> BoxTaskFuture {
///         Box::pin(async move {
///             while !ctx.is_cancelled() {
///                 // read lines from self.path...
///                 break;
///             }
///             Ok::<_, TaskError>(())
///         })
///     }
/// }
/// ```
pub trait Task: Send + 'static {
    /// Human-readable label used in log fields.
    fn name(&self) -> &str {
        "task"
    }

    /// Consumes the task and returns the future that performs the work.
    ///
    /// `ctx` is the group's lifecycle signal; once it is cancelled the task
    /// should wind down and return.
    fn spawn(self: Box<Self>, ctx: CancellationToken) -> BoxTaskFuture;
}

impl<F, Fut> Task for F
where
    F: FnOnce(CancellationToken) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    fn spawn(self: Box<Self>, ctx: CancellationToken) -> BoxTaskFuture {
        Box::pin((*self)(ctx))
    }
}
