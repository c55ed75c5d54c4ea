// Cooperative cancellation for in-flight fetches.
//
// A `CancellationToken` is handed to a use case together with the request.
// The owner (a view, a request scope) calls `cancel()` when the result is no
// longer wanted; the use case checks the token after its single await point
// and drops the result instead of publishing a stale view.

use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone, Debug)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once `cancel` has been called on any clone of this token.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so `wait_for` only errors if it is dropped.
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}
