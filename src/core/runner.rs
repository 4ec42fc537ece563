//! # Run one admitted task.
//!
//! Executes a [`Task`] that already holds an [`Admission`], and routes its
//! outcome to the group's reporter.
//!
//! ## Flow
//! ```text
//! Success:
//!   task.spawn(ctx) → Ok(())  → drop admission
//!
//! Failure:
//!   task.spawn(ctx) → Err(e)  → reporter.report("{prefix}: {e}") → drop admission
//!
//! Panic:
//!   task.spawn(ctx) → panic   → catch_unwind → Err(Panicked) → report → drop admission
//! ```
//!
//! ## Rules
//! - Every `Err` (including `Canceled`) produces **exactly one** report
//! - The report happens before the task leaves the in-flight set, so a
//!   successful `stop()` implies every failure has been reported
//! - A panic never leaks the admission unit

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::admission::Admission;
use crate::error::TaskError;
use crate::reporters::{ReportError, format_failure};
use crate::tasks::Task;

/// Runs `task` to completion and reports its failure, if any.
pub(crate) async fn run_admitted(
    task: Box<dyn Task>,
    ctx: CancellationToken,
    admission: Admission,
    reporter: &dyn ReportError,
    prefix: &str,
) {
    let name = task.name().to_owned();

    // `spawn` runs inside the guarded future so a panic while building it is caught too.
    let fut = async move { task.spawn(ctx).await };
    let res = match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(res) => res,
        Err(panic_err) => Err(TaskError::Panicked {
            info: panic_info(&*panic_err),
        }),
    };

    match res {
        Ok(()) => {
            debug!(prefix, task = %name, "task finished");
        }
        Err(err) => {
            debug!(prefix, task = %name, label = err.as_label(), "task failed");
            reporter.report(&format_failure(prefix, &err));
        }
    }
    drop(admission);
}

fn panic_info(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
