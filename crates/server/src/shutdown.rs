use std::future::Future;
use std::io;

use tracing::{error, info};

/// Resolves once `signal` reports a shutdown request. A signal that fails to
/// install never resolves, so the server keeps running.
pub async fn wait_for<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("shutdown signal received, stopping server"),
        Err(err) => {
            error!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
