//! # Group: bounded concurrent task execution with time-bounded shutdown.
//!
//! The [`Group`] owns an admission gate (fair semaphore), a shared lifecycle
//! signal ([`CancellationToken`]), an in-flight counter and an error reporter.
//! Callers submit one-shot tasks; the group runs at most `capacity` of them at
//! once and forwards their failures to the reporter.
//!
//! ## Key responsibilities
//! - gate admission: callers wait (FIFO) for a free unit, they are never told "try later"
//! - run each admitted task on its own tokio task with a child of the lifecycle signal,
//!   so only `stop` can cancel the group
//! - report every task failure as `"{prefix}: {error}"`
//! - on [`Group::stop`]: cancel the signal, refuse new work, wait up to the stop timeout
//!
//! ## High-level architecture
//! ```text
//! submit(task)                                     stop()
//!   │                                                │
//!   ├─ token cancelled? ──► Err(Canceled)            ├─ state Live → Stopping
//!   ├─ select { token.cancelled(), sem.acquire() }   ├─ token.cancel()      (tasks see it)
//!   │      └─ cancelled ──► Err(Canceled)            ├─ sem.close()         (waiters released)
//!   ├─ state lock: still Live? else Err(Canceled)    ├─ tracker.close()
//!   └─ tracker.spawn(run_admitted(task, child))      └─ timeout(stop_timeout, tracker.wait())
//!            │                                              ├─ Ok       → Ok(())
//!            ├─ Ok(())  → release unit                      └─ elapsed  → Err(StopTimeout)
//!            └─ Err(e)  → reporter.report(..) → release     state → Stopped
//! ```
//!
//! ## State machine
//! ```text
//! Live ──stop()──► Stopping ──(drained | timeout)──► Stopped
//! ```
//! Only `Live` admits tasks. A timed-out stop leaves stragglers running; they
//! were asked to stop, not killed.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use taskgroup::{Group, MemoryReporter, TaskError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reporter = Arc::new(MemoryReporter::new());
//!     let group = Group::new(2, Duration::from_secs(1), reporter.clone(), "filestream");
//!
//!     group
//!         .submit(|ctx: CancellationToken| async move {
//!             ctx.cancelled().await;
//!             Ok::<(), TaskError>(())
//!         })
//!         .await?;
//!     group
//!         .submit(|_ctx: CancellationToken| async { Err::<(), _>(TaskError::fail("permission denied")) })
//!         .await?;
//!
//!     group.stop().await?;
//!     assert_eq!(reporter.messages(), vec!["filestream: permission denied"]);
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::{OwnedSemaphorePermit, Semaphore, TryAcquireError};
use tokio::time;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

use crate::core::{
    admission::Admission,
    builder::GroupBuilder,
    config::GroupConfig,
    runner, shutdown,
};
use crate::error::GroupError;
use crate::reporters::{ReportError, format_failure};
use crate::tasks::Task;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Live,
    Stopping,
    Stopped,
}

struct Inner {
    capacity: usize,
    stop_timeout: Duration,
    prefix: String,
    semaphore: Arc<Semaphore>,
    token: CancellationToken,
    /// Every spawned tokio task, admitted or still waiting for admission.
    tracker: TaskTracker,
    /// Admitted tasks that have not completed yet.
    in_flight: Arc<AtomicUsize>,
    reporter: Arc<dyn ReportError>,
    state: Mutex<State>,
}

/// Bounded concurrent task group.
///
/// Cloning is cheap and yields another handle to the same group, so many
/// producers (e.g. one per discovered source) can submit concurrently.
#[derive(Clone)]
pub struct Group {
    inner: Arc<Inner>,
}

impl Group {
    /// Creates a live group.
    ///
    /// - `capacity`: maximum concurrently running tasks; `0` is raised to `1`,
    ///   values above [`Semaphore::MAX_PERMITS`] are lowered to it
    /// - `stop_timeout`: how long [`stop`](Self::stop) waits; `Duration::ZERO` = do not wait
    /// - `reporter`: receives every task failure
    /// - `error_prefix`: label embedded in every reported failure (may be empty)
    pub fn new(
        capacity: usize,
        stop_timeout: Duration,
        reporter: Arc<dyn ReportError>,
        error_prefix: impl Into<String>,
    ) -> Self {
        let capacity = capacity.clamp(1, Semaphore::MAX_PERMITS);
        Self {
            inner: Arc::new(Inner {
                capacity,
                stop_timeout,
                prefix: error_prefix.into(),
                semaphore: Arc::new(Semaphore::new(capacity)),
                token: CancellationToken::new(),
                tracker: TaskTracker::new(),
                in_flight: Arc::new(AtomicUsize::new(0)),
                reporter,
                state: Mutex::new(State::Live),
            }),
        }
    }

    /// Starts a [`GroupBuilder`] from the given configuration.
    pub fn builder(cfg: GroupConfig) -> GroupBuilder {
        GroupBuilder::new(cfg)
    }

    /// Admits `task` and launches it; waits while the group is at capacity.
    ///
    /// Returns as soon as the task is launched, not when it finishes. The
    /// task's outcome is only visible through the reporter.
    ///
    /// ### Errors
    /// [`GroupError::Canceled`] if the group is stopping or stopped, either
    /// already at call time or while this call was waiting for a free unit.
    pub async fn submit<T: Task>(&self, task: T) -> Result<(), GroupError> {
        if self.inner.token.is_cancelled() {
            return Err(GroupError::Canceled);
        }
        let permit = self.acquire().await?;
        self.launch(Box::new(task), permit)
    }

    /// Admits `task` only if a unit is free right now.
    ///
    /// Returns `Ok(false)` (and drops `task`) when the group is at capacity.
    ///
    /// ### Errors
    /// [`GroupError::Canceled`] if the group is stopping or stopped.
    pub fn try_submit<T: Task>(&self, task: T) -> Result<bool, GroupError> {
        if self.inner.token.is_cancelled() {
            return Err(GroupError::Canceled);
        }
        match Arc::clone(&self.inner.semaphore).try_acquire_owned() {
            Ok(permit) => self.launch(Box::new(task), permit).map(|()| true),
            Err(TryAcquireError::NoPermits) => Ok(false),
            Err(TryAcquireError::Closed) => Err(GroupError::Canceled),
        }
    }

    /// Hands `task` to the group without waiting for admission.
    ///
    /// Admission happens in the background. If the group stops before a unit
    /// frees up, the task never runs and the refusal is sent to the reporter.
    /// `stop` waits for such pending tasks as well.
    ///
    /// ### Errors
    /// [`GroupError::Canceled`] if the group is stopping or stopped.
    pub fn spawn<T: Task>(&self, task: T) -> Result<(), GroupError> {
        let state = self.inner.lock_state();
        if *state != State::Live {
            return Err(GroupError::Canceled);
        }

        let task: Box<dyn Task> = Box::new(task);
        let this = self.clone();
        self.inner.tracker.spawn(async move {
            let admission = match this.acquire().await.and_then(|p| this.admit(p)) {
                Ok(admission) => admission,
                Err(err) => {
                    debug!(prefix = %this.inner.prefix, task = task.name(), "pending task refused");
                    this.inner
                        .reporter
                        .report(&format_failure(&this.inner.prefix, &err));
                    return;
                }
            };
            this.run(task, admission).await;
        });
        Ok(())
    }

    /// Cancels the lifecycle signal and waits for in-flight tasks to return.
    ///
    /// ### Behavior
    /// - First call: `Live → Stopping`, fires the signal, releases blocked
    ///   submitters, then waits up to the stop timeout
    /// - Concurrent call while stopping: waits for the same drain
    /// - Call after stopped: returns `Ok(())` immediately
    ///
    /// The group ends `Stopped` whether or not the drain succeeded.
    ///
    /// ### Errors
    /// [`GroupError::StopTimeout`] when tasks are still running at the
    /// deadline. They keep running in the background.
    pub async fn stop(&self) -> Result<(), GroupError> {
        {
            let mut state = self.inner.lock_state();
            match *state {
                State::Stopped => return Ok(()),
                State::Stopping => {}
                State::Live => {
                    *state = State::Stopping;
                    self.inner.token.cancel();
                    self.inner.semaphore.close();
                    self.inner.tracker.close();
                    info!(
                        prefix = %self.inner.prefix,
                        in_flight = self.in_flight(),
                        timeout = ?self.inner.stop_timeout,
                        "stopping task group"
                    );
                }
            }
        }

        let res = self.drain().await;
        *self.inner.lock_state() = State::Stopped;
        res
    }

    /// Waits for a termination signal (or another caller's `stop`), then stops.
    ///
    /// If the signal listener cannot be installed, only an explicit `stop`
    /// elsewhere ends the wait.
    pub async fn stop_on_signal(&self) -> Result<(), GroupError> {
        let signal = async {
            if let Err(err) = shutdown::wait_for_shutdown_signal().await {
                warn!(prefix = %self.inner.prefix, error = %err, "cannot listen for shutdown signals");
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = signal => {
                info!(prefix = %self.inner.prefix, "shutdown signal received");
            }
            _ = self.inner.token.cancelled() => {}
        }
        self.stop().await
    }

    /// Number of admitted tasks that have not completed.
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Maximum number of concurrently running tasks.
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Admission units free right now.
    pub fn available(&self) -> usize {
        self.inner.semaphore.available_permits()
    }

    /// Configured stop timeout.
    pub fn stop_timeout(&self) -> Duration {
        self.inner.stop_timeout
    }

    /// Label used in reported failures.
    pub fn error_prefix(&self) -> &str {
        &self.inner.prefix
    }

    /// True once a `stop` call has completed.
    pub fn is_stopped(&self) -> bool {
        *self.inner.lock_state() == State::Stopped
    }

    /// Returns a token that is cancelled when the group starts stopping.
    ///
    /// It is a child of the lifecycle signal: cancelling it does not stop the group.
    pub fn token(&self) -> CancellationToken {
        self.inner.token.child_token()
    }

    /// Waits for a free unit; gives up when the lifecycle signal fires.
    async fn acquire(&self) -> Result<OwnedSemaphorePermit, GroupError> {
        let permit = Arc::clone(&self.inner.semaphore).acquire_owned();
        tokio::select! {
            biased;
            _ = self.inner.token.cancelled() => Err(GroupError::Canceled),
            res = permit => res.map_err(|_closed| GroupError::Canceled),
        }
    }

    /// Turns a permit into an admission if the group is still live.
    fn admit(&self, permit: OwnedSemaphorePermit) -> Result<Admission, GroupError> {
        let state = self.inner.lock_state();
        if *state != State::Live {
            return Err(GroupError::Canceled);
        }
        Ok(Admission::new(permit, &self.inner.in_flight))
    }

    /// Admits and spawns under the state lock, so nothing launches after `stop` began.
    fn launch(&self, task: Box<dyn Task>, permit: OwnedSemaphorePermit) -> Result<(), GroupError> {
        let state = self.inner.lock_state();
        if *state != State::Live {
            return Err(GroupError::Canceled);
        }
        let admission = Admission::new(permit, &self.inner.in_flight);
        debug!(
            prefix = %self.inner.prefix,
            task = task.name(),
            in_flight = self.in_flight(),
            "task admitted"
        );

        let this = self.clone();
        self.inner
            .tracker
            .spawn(async move { this.run(task, admission).await });
        drop(state);
        Ok(())
    }

    /// Each task gets a child of the lifecycle signal: it sees `stop`, but
    /// cancelling its own `ctx` does not reach the group.
    async fn run(&self, task: Box<dyn Task>, admission: Admission) {
        runner::run_admitted(
            task,
            self.inner.token.child_token(),
            admission,
            self.inner.reporter.as_ref(),
            &self.inner.prefix,
        )
        .await;
    }

    async fn drain(&self) -> Result<(), GroupError> {
        let timeout = self.inner.stop_timeout;
        match time::timeout(timeout, self.inner.tracker.wait()).await {
            Ok(()) => {
                info!(prefix = %self.inner.prefix, "task group stopped");
                Ok(())
            }
            Err(_elapsed) => {
                let in_flight = self.in_flight();
                warn!(
                    prefix = %self.inner.prefix,
                    in_flight,
                    timeout = ?timeout,
                    "tasks still running after stop timeout; leaving them behind"
                );
                Err(GroupError::StopTimeout { timeout, in_flight })
            }
        }
    }
}

impl Inner {
    // State is a plain enum: a poisoned lock still holds a valid value.
    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("prefix", &self.inner.prefix)
            .field("capacity", &self.inner.capacity)
            .field("in_flight", &self.in_flight())
            .field("stop_timeout", &self.inner.stop_timeout)
            .field("state", &*self.inner.lock_state())
            .field("reporter", &self.inner.reporter.name())
            .finish()
    }
}
