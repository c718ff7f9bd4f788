//! Graceful shutdown and signal handling.
//!
//! SIGTERM and SIGINT flip a watch channel. The server stops accepting new
//! connections as soon as the flag is set and gets a bounded grace period to
//! finish the requests already in flight.

use std::time::Duration;

use tokio::sync::watch;

/// Spawn the signal listener and return a receiver that becomes `true` once
/// a shutdown signal arrives.
pub fn setup_shutdown_handler() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);

    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
        }

        let _ = tx.send(true);
    });

    rx
}

/// Resolves once shutdown has been requested. Never resolves if the sender is
/// dropped without signalling.
pub async fn signalled(mut rx: watch::Receiver<bool>) {
    let requested = rx.wait_for(|requested| *requested).await.map(|_| ());
    if requested.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Resolves `grace` after shutdown has been requested.
pub async fn grace_period_elapsed(rx: watch::Receiver<bool>, grace: Duration) {
    signalled(rx).await;
    tracing::info!(
        grace_secs = grace.as_secs(),
        "Graceful shutdown initiated, waiting for connections to close"
    );
    tokio::time::sleep(grace).await;
}
