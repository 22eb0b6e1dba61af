//! Server lifecycle.

use deckhand_error::{DeckhandResult, ServerError, ServerErrorKind};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

use crate::{AppState, ServerConfig, create_router};

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Fails if the address is invalid or cannot be bound, or if the server
/// stops with an I/O error.
#[instrument(skip_all, fields(host = %config.host, port = config.port))]
pub async fn serve(config: &ServerConfig, state: AppState) -> DeckhandResult<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: addr.to_string(),
            message: e.to_string(),
        })
    })?;

    info!(address = %addr, "Deckhand listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
