//! # Stop a task group when the agent is asked to exit.
//!
//! [`wait_for_shutdown_signal`] resolves on the first termination signal the
//! process receives. [`Group::stop_on_signal`](crate::Group::stop_on_signal)
//! races it against the group's lifecycle signal and then drains the group,
//! so an agent typically runs one `stop_on_signal` per group next to its
//! discovery loop.
//!
//! | Platform | Signals                         |
//! |----------|---------------------------------|
//! | unix     | `SIGINT`, `SIGTERM`, `SIGQUIT`  |
//! | other    | Ctrl-C                          |

/// Resolves when the agent receives `SIGINT`, `SIGTERM` or `SIGQUIT`.
///
/// Listeners are installed per call. An `Err` means they could not be
/// installed; the caller decides whether to stop right away or keep running.
#[cfg(unix)]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut quit = signal(SignalKind::quit())?;

    let kind = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
        _ = quit.recv() => "SIGQUIT",
    };
    tracing::debug!(signal = kind, "termination signal received");
    Ok(())
}

/// Resolves when the agent receives Ctrl-C.
///
/// An `Err` means the handler could not be installed.
#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    tracing::debug!(signal = "ctrl-c", "termination signal received");
    Ok(())
}
