//! Runtime core: admission, execution and shutdown.
//!
//! The public API from this module is [`Group`], its [`GroupBuilder`] and
//! [`GroupConfig`].
//!
//! Internal modules:
//! - [`group`]: admission gate, lifecycle signal, `submit`/`stop`;
//! - [`admission`]: per-task hold on the gate, keeps the in-flight count;
//! - [`runner`]: executes one admitted task and reports its failure;
//! - [`shutdown`]: cross-platform shutdown signal handling;
//! - [`builder`] / [`config`]: construction from settings.

mod admission;
mod builder;
mod config;
mod group;
mod runner;
mod shutdown;

pub use builder::GroupBuilder;
pub use config::GroupConfig;
pub use group::Group;
pub use shutdown::wait_for_shutdown_signal;
