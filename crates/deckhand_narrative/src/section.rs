//! Per-section paragraph generation.

use std::sync::Arc;

use deckhand_core::Generated;
use deckhand_interface::DeckhandDriver;
use tracing::{debug, instrument, warn};

use crate::prompts::{section_placeholder, section_prompt};

/// Asks the oracle for the paragraph of one outline section.
#[derive(Clone)]
pub struct SectionWriter {
    driver: Arc<dyn DeckhandDriver>,
}

impl SectionWriter {
    /// Create a writer over a shared oracle.
    pub fn new(driver: Arc<dyn DeckhandDriver>) -> Self {
        Self { driver }
    }

    /// Write the body of `section` in the context of `topic`.
    ///
    /// The oracle reply is returned verbatim. On failure the placeholder
    /// from [`section_placeholder`] is returned instead.
    #[instrument(skip(self), fields(model = self.driver.model_name()))]
    pub async fn generate_content(&self, section: &str, topic: &str) -> Generated<String> {
        match self.driver.complete(&section_prompt(section, topic)).await {
            Ok(body) => {
                debug!(chars = body.len(), "Section written");
                Generated::Oracle(body)
            }
            Err(e) => {
                warn!(error = %e, "Section generation failed, using placeholder");
                Generated::fallback(section_placeholder(section), e.message())
            }
        }
    }
}

impl std::fmt::Debug for SectionWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionWriter")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .finish()
    }
}
