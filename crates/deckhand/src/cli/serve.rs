//! `deckhand serve`.

use deckhand::{DeckhandConfig, DeckhandResult, ServerConfig, build_state, serve};
use tracing::info;

/// Start the HTTP server and run until Ctrl-C.
pub async fn handle_serve_command(
    config: DeckhandConfig,
    host: Option<String>,
    port: Option<u16>,
) -> DeckhandResult<()> {
    let server = ServerConfig::new(
        host.unwrap_or_else(|| config.server().host.clone()),
        port.unwrap_or(config.server().port),
    );
    let config = config.with_server(server);

    let state = build_state(&config)?;
    info!(host = %config.server().host, port = config.server().port, "Starting server");
    serve(config.server(), state).await
}
