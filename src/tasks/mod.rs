//! # Task abstractions.
//!
//! This module provides the task-related types:
//! - [`Task`] - trait for one-shot, cancelable units of work
//! - [`TaskFn`] - closure-backed task carrying a name for diagnostics
//! - [`BoxTaskFuture`] - the boxed future a task turns into once admitted
//!
//! Plain closures `FnOnce(CancellationToken) -> impl Future<Output = Result<(), TaskError>>`
//! are tasks too; wrap them in [`TaskFn`] only when a name in the logs helps.

mod task;
mod task_fn;

pub use task::{BoxTaskFuture, Task};
pub use task_fn::TaskFn;
