//! Shutdown coordination for the server.

use tokio::sync::watch;

/// Fires once; every [`ShutdownSignal`] resolves after that, including ones
/// created later.
pub struct Shutdown {
    state: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self { state }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            state: self.state.subscribe(),
        }
    }

    pub fn trigger(&self) {
        self.state.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.state.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half handed to long-running tasks.
#[derive(Clone)]
pub struct ShutdownSignal {
    state: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolves once shutdown was triggered or the coordinator was dropped.
    pub async fn recv(mut self) {
        let _ = self.state.wait_for(|triggered| *triggered).await;
    }
}
