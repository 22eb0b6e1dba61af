//! `deckhand render`.

use std::path::PathBuf;

use deckhand::{DeckhandConfig, build_state, render_deck, write_deck};

/// Generate one deck and write it next to the caller.
pub async fn handle_render_command(
    config: &DeckhandConfig,
    title: &str,
    topic: &str,
    output: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let state = build_state(config)?;
    let deck = render_deck(&state, title, topic).await?;

    let fallbacks = deck.draft().fallback_count();
    if fallbacks > 0 {
        tracing::warn!(fallbacks, "Some oracle calls failed; placeholder text was used");
    }

    Ok(write_deck(&deck, output.as_deref())?)
}
