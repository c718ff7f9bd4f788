//! HTTP server startup logic.

use std::future::Future;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{AppConfig, HttpServerConfig, SHUTDOWN_GRACE_SECS};
use crate::error::ServerError;

use super::shutdown;

/// Resolve the configured host (IP literal or hostname) and bind a listener
/// to the first address that accepts it.
pub async fn bind(config: &HttpServerConfig) -> Result<TcpListener, ServerError> {
    let host = config.host.trim_start_matches('[').trim_end_matches(']');

    TcpListener::bind((host, config.port))
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_address(),
            source,
        })
}

/// Serve `app` on `listener` until `shutdown` resolves and in-flight
/// requests have completed.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = bind(&config.http).await?;
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(
        %local_addr,
        service = %config.service.name,
        debug = config.http.debug,
        "Listening at http://{}",
        local_addr
    );

    let shutdown_rx = shutdown::setup_shutdown_handler();
    let server = serve(listener, app, shutdown::signalled(shutdown_rx.clone()));
    let grace = shutdown::grace_period_elapsed(
        shutdown_rx,
        Duration::from_secs(SHUTDOWN_GRACE_SECS),
    );

    tokio::select! {
        result = server => {
            result?;
            tracing::info!("Server stopped");
        }
        _ = grace => {
            tracing::warn!("Grace period elapsed, closing remaining connections");
        }
    }

    Ok(())
}
