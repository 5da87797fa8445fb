use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Trailing-edge debouncer backed by a cancellable tokio task.
///
/// Each `schedule` aborts the previously pending task, so only the last
/// action of a burst runs, `delay` after it was scheduled. Dropping the
/// debouncer aborts whatever is pending.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `action` after the quiet window, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Wait for the pending action, if any, to finish
    pub async fn wait(&mut self) {
        if let Some(handle) = self.pending.take() {
            // Cancelled tasks resolve with a JoinError; nothing to report
            let _ = handle.await;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
