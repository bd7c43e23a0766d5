//! Deferred overlay teardown
//!
//! The hide transition plays for a fixed delay before the overlay leaves the
//! document. The timer is a cancellable deferred task: scheduling cancels
//! any previously scheduled teardown, so repeated dismissal triggers never
//! produce overlapping removal attempts.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delay between the hide transition starting and the overlay being removed
pub const HIDE_DELAY: Duration = Duration::from_millis(500);

/// Cancellable deferred task owned by the overlay controller
///
/// Dropping the timer aborts any task still pending.
#[derive(Debug, Default)]
pub struct TeardownTimer {
    handle: Option<JoinHandle<()>>,
}

impl TeardownTimer {
    /// Create an idle timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `delay`, superseding any previously scheduled task
    ///
    /// Must be called within a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Abort any pending task
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether a teardown is scheduled and has not yet run
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TeardownTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
