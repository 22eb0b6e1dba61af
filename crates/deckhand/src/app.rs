//! Wiring shared by the `serve` and `render` commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use deckhand_core::GenerationRequest;
use deckhand_error::DeckhandResult;
use deckhand_models::GeminiClient;
use deckhand_server::{AppState, BuiltDeck};
use tracing::{info, instrument};

use crate::DeckhandConfig;

/// Create the oracle client once and wrap it with the configured theme.
///
/// A missing `GEMINI_API_KEY` is not an error here; every oracle call will
/// fail and fall back instead.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_state(config: &DeckhandConfig) -> DeckhandResult<AppState> {
    let client = GeminiClient::lazy_from_env(config.oracle().gemini_config()?)?;
    info!(model = %client.config().model(), "Oracle client ready");
    Ok(AppState::new(Arc::new(client), config.layout().theme()))
}

/// Validate the request and build one deck.
///
/// # Errors
///
/// Returns a validation error for a blank title or topic, or a
/// serialization error if the package cannot be written.
#[instrument(skip(state))]
pub async fn render_deck(state: &AppState, title: &str, topic: &str) -> DeckhandResult<BuiltDeck> {
    let request = GenerationRequest::new(title, topic).validate()?;
    state.build_deck(&request).await
}

/// Write a deck to `output`, or to its download filename in the current
/// directory.
///
/// Path separators in the download filename are replaced with `_`, so a
/// title never selects another directory.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn write_deck(deck: &BuiltDeck, output: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(local_filename(deck.filename())));
    std::fs::write(&path, deck.bytes())?;
    info!(path = %path.display(), bytes = deck.bytes().len(), "Deck written");
    Ok(path)
}

fn local_filename(filename: &str) -> String {
    filename.replace(['/', '\\'], "_")
}
