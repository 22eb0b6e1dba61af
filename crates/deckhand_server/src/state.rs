//! Shared, read-only request context.

use std::sync::Arc;

use deckhand_core::ValidatedRequest;
use deckhand_error::DeckhandResult;
use deckhand_interface::DeckhandDriver;
use deckhand_layout::{Deck, Theme};
use deckhand_narrative::{PresentationDraft, PresentationPipeline};
use deckhand_pptx::{PackageOptions, download_filename, serialize};
use tracing::{debug, instrument};

/// A serialized deck ready to be sent or saved.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct BuiltDeck {
    /// Suggested download filename
    filename: String,
    /// `.pptx` package bytes
    bytes: Vec<u8>,
    /// Text the deck was built from
    draft: PresentationDraft,
}

impl BuiltDeck {
    /// Take the package bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Oracle, pipeline and theme shared by every request.
///
/// The oracle client is created once at startup and handed in here; nothing
/// below reaches for globals.
#[derive(Debug, Clone)]
pub struct AppState {
    pipeline: PresentationPipeline,
    theme: Theme,
}

impl AppState {
    /// Build the state around a shared oracle.
    pub fn new(driver: Arc<dyn DeckhandDriver>, theme: Theme) -> Self {
        Self {
            pipeline: PresentationPipeline::new(driver),
            theme,
        }
    }

    /// Layout theme applied to every deck.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Generate, lay out and serialize the deck for one request.
    ///
    /// # Errors
    ///
    /// Generation never fails; only serialization errors are returned.
    #[instrument(skip_all, fields(title = request.title(), topic = request.topic()))]
    pub async fn build_deck(&self, request: &ValidatedRequest) -> DeckhandResult<BuiltDeck> {
        debug!(stage = "generating", "Generating deck text");
        let draft = self.pipeline.generate(request).await;

        debug!(stage = "serializing", "Laying out and serializing deck");
        let deck = Deck::from_content(request.title(), request.topic(), &draft.section_contents());
        let slides = deck.render_all(&self.theme);
        let bytes = serialize(&slides, &PackageOptions::new(request.title()))?;

        Ok(BuiltDeck {
            filename: download_filename(request.title()),
            bytes,
            draft,
        })
    }
}
