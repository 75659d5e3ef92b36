// In-flight request handle returned by the callback-style endpoints.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to a spawned request.
///
/// Dropping the handle detaches the request; it still runs and the
/// completion still fires. Cancelling stops the transport future and the
/// completion receives [`Error::Cancelled`](crate::Error::Cancelled) instead.
#[derive(Debug)]
pub struct TaskHandle {
    inner: JoinHandle<()>,
    cancel: CancellationToken,
}

impl TaskHandle {
    pub(crate) fn new(inner: JoinHandle<()>, cancel: CancellationToken) -> Self {
        Self { inner, cancel }
    }

    /// Cancel the request. No-op once the completion has run.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Wait until the completion has run. Returns `false` if the task
    /// panicked instead.
    pub async fn wait(self) -> bool {
        self.inner.await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn spawn_cancellable(delay: Duration) -> (TaskHandle, tokio::sync::oneshot::Receiver<bool>) {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let token = CancellationToken::new();
        let child = token.clone();
        let handle = tokio::spawn(async move {
            let cancelled = tokio::select! {
                biased;
                _ = child.cancelled() => true,
                _ = tokio::time::sleep(delay) => false,
            };
            let _ = tx.send(cancelled);
        });
        (TaskHandle::new(handle, token), rx)
    }

    #[tokio::test]
    async fn test_wait_reports_completion() {
        let (handle, rx) = spawn_cancellable(Duration::ZERO);
        assert!(handle.wait().await);
        assert!(!rx.await.unwrap());
    }

    #[tokio::test]
    async fn test_cancel_signals_pending_task() {
        let (handle, rx) = spawn_cancellable(Duration::from_secs(60));
        assert!(!handle.is_finished());
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(handle.wait().await);
        assert!(rx.await.unwrap());
    }
}
