//! # taskgroup
//!
//! **taskgroup** runs many long-lived workers (file harvesters, container log
//! readers, metric pollers) under one concurrency cap, and stops them in an
//! orderly, time-bounded way.
//!
//! A shipping agent discovers sources continuously and starts one worker per
//! source. The [`Group`] bounds how many run at once, collects their failures
//! through a [`ReportError`] instead of returning them to the submitter, and
//! on [`Group::stop`] asks every worker to wind down and waits for them, but
//! never longer than the configured stop timeout.
//!
//! ## Architecture
//! ```text
//!   discovery ──► submit(task) ──► ┌───────────────────────────────────────────┐
//!   discovery ──► submit(task) ──► │  Group                                    │
//!   discovery ──► spawn(task)  ──► │  - Semaphore (capacity, FIFO admission)   │
//!                                  │  - CancellationToken (lifecycle signal)   │
//!                                  │  - TaskTracker + in-flight counter        │
//!                                  └──────┬──────────────┬──────────────┬──────┘
//!                                         ▼              ▼              ▼
//!                                    task(ctx)      task(ctx)      task(ctx)
//!                                         │ Err(e)       │              │ panic
//!                                         ▼              ▼              ▼
//!                                  ReportError::report("{prefix}: {error}")
//! ```
//!
//! ### Lifecycle
//! ```text
//! Live ──stop()──► Stopping ──(all tasks returned | stop_timeout)──► Stopped
//!
//! stop():
//!   ├─► token.cancel()          tasks observe ctx.cancelled()
//!   ├─► refuse new submissions  blocked submitters get GroupError::Canceled
//!   └─► wait ≤ stop_timeout
//!         ├─ drained  ─► Ok(())
//!         └─ timeout  ─► Err(GroupError::StopTimeout), stragglers keep running
//! ```
//!
//! ## Features
//! | Area          | Description                                             | Key types / traits                       |
//! |---------------|---------------------------------------------------------|------------------------------------------|
//! | **Group**     | Bounded admission, cooperative cancellation, drain.     | [`Group`], [`GroupBuilder`]              |
//! | **Tasks**     | One-shot units of work; closures work out of the box.   | [`Task`], [`TaskFn`]                     |
//! | **Reporting** | Where task failures go.                                 | [`ReportError`], [`LogReporter`], [`MemoryReporter`] |
//! | **Errors**    | Typed errors for group operations and task bodies.      | [`GroupError`], [`TaskError`]            |
//! | **Config**    | Capacity, stop timeout and prefix in one place.         | [`GroupConfig`]                          |
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use taskgroup::{Group, GroupConfig, TaskError, TaskFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = GroupConfig {
//!         max_concurrent: 8,
//!         stop_timeout: Duration::from_secs(5),
//!         error_prefix: "filestream".into(),
//!     };
//!     let group = Group::builder(cfg).build();
//!
//!     let harvester = TaskFn::new("/var/log/app.log", |ctx: CancellationToken| async move {
//!         while !ctx.is_cancelled() {
//!             // read and ship lines...
//!             tokio::time::sleep(Duration::from_millis(10)).await;
//!         }
//!         Ok::<(), TaskError>(())
//!     });
//!     group.submit(harvester).await?;
//!
//!     group.stop().await?;
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod reporters;
mod tasks;

// ---- Public re-exports ----

pub use self::core::{Group, GroupBuilder, GroupConfig, wait_for_shutdown_signal};
pub use error::{GroupError, TaskError};
pub use reporters::{LogReporter, MemoryReporter, ReportError};
pub use tasks::{BoxTaskFuture, Task, TaskFn};
