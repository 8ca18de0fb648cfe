//! OS signal handling.

use std::future::Future;
use std::io;

use crate::lifecycle::shutdown::Shutdown;

/// Waits for Ctrl+C, then triggers `shutdown`.
pub async fn wait_for_ctrl_c(shutdown: &Shutdown) {
    trigger_on(tokio::signal::ctrl_c(), shutdown).await;
}

/// Triggers `shutdown` when `signal` arrives. If the listener cannot be
/// installed the error is logged and this never returns, so serving goes on.
pub async fn trigger_on<F>(signal: F, shutdown: &Shutdown)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install signal handler, shutdown only via process kill");
            std::future::pending::<()>().await;
        }
    }
}
