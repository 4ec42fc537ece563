//! # Example: tail_sources
//!
//! Simulates an input that discovers more sources than it may tail at once.
//!
//! Shows how to:
//! - Build a [`Group`] from a [`GroupConfig`] with the default tracing reporter
//! - Submit one harvester per discovered source (submitters wait when full)
//! - Let failing harvesters report through the group's reporter
//! - Stop on Ctrl-C / SIGTERM, or after a few seconds, whichever comes first
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► discovery: 12 sources, max_concurrent = 4
//!   │     └─► group.submit(harvester) (waits while 4 are running)
//!   │
//!   ├─► harvester(ctx)
//!   │     ├─► tick until ctx cancelled or its lines run out
//!   │     └─► every third source fails → "filestream: ..." via LogReporter
//!   │
//!   └─► stop: signal or 3s timer → group.stop() (stop_timeout = 2s)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example tail_sources
//! ```

use std::time::Duration;

use taskgroup::{Group, GroupConfig, TaskError, TaskFn};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = GroupConfig {
        max_concurrent: 4,
        stop_timeout: Duration::from_secs(2),
        error_prefix: "filestream".into(),
    };
    let group = Group::builder(cfg).build();

    let stopper = {
        let group = group.clone();
        tokio::spawn(async move {
            tokio::select! {
                res = group.stop_on_signal() => res,
                _ = tokio::time::sleep(Duration::from_secs(3)) => group.stop().await,
            }
        })
    };

    for id in 0..12u64 {
        let path = format!("/var/log/source-{id}.log");
        let harvester = TaskFn::new(path.clone(), move |ctx: CancellationToken| async move {
            let lines = 5 + id * 3;
            for line in 0..lines {
                if ctx.is_cancelled() {
                    tracing::info!(%path, line, "harvester cancelled");
                    return Ok(());
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            if id % 3 == 0 {
                return Err(TaskError::fail(format!("{path}: file was truncated")));
            }
            tracing::info!(%path, lines, "harvester reached EOF");
            Ok(())
        });

        if let Err(err) = group.submit(harvester).await {
            tracing::warn!(error = %err, "discovery stopped submitting");
            break;
        }
    }

    match stopper.await? {
        Ok(()) => tracing::info!("all harvesters stopped"),
        Err(err) => tracing::warn!(error = %err, label = err.as_label(), "unclean shutdown"),
    }
    Ok(())
}
