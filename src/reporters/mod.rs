//! # Error reporters for the task group.
//!
//! A task failure never reaches the caller that submitted it. Instead the group
//! formats it and hands it to a [`ReportError`] implementation.
//!
//! ## Architecture
//! ```text
//! task body ── Err(e) ──► runner ── format("{prefix}: {e}") ──► ReportError::report(&str)
//!                                                                    │
//!                                                       ┌────────────┴────────────┐
//!                                                       ▼                         ▼
//!                                                  LogReporter              MemoryReporter
//!                                               (tracing::error!)        (Mutex<Vec<String>>)
//! ```
//!
//! ## Contract
//! - `report` is called from many completing tasks at once; the reporter owns
//!   its synchronization and must not drop or interleave messages.
//! - `report` is synchronous and should be cheap: it runs on the task's
//!   worker right after the task body returns.

mod log;
mod memory;
mod reporter;

pub use log::LogReporter;
pub use memory::MemoryReporter;
pub use reporter::ReportError;
pub(crate) use reporter::format_failure;
