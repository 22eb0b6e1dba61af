//! The outline-then-sections generation sequence.

use std::sync::Arc;

use deckhand_core::{Generated, SectionContent, ValidatedRequest};
use deckhand_interface::DeckhandDriver;
use serde::Serialize;
use tracing::{info, instrument};

use crate::{OutlineGenerator, SectionWriter};

/// Text of a presentation, before layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct PresentationDraft {
    /// Deck title
    title: String,
    /// Deck topic
    topic: String,
    /// Section names, from the oracle or the fallback list
    outline: Generated<Vec<String>>,
    /// One body per outline entry, in outline order
    sections: Vec<Generated<SectionContent>>,
}

impl PresentationDraft {
    /// Section bodies without their provenance, ready for layout.
    pub fn section_contents(&self) -> Vec<SectionContent> {
        self.sections
            .iter()
            .map(|section| section.value().clone())
            .collect()
    }

    /// Number of generation steps that used fixed content.
    pub fn fallback_count(&self) -> usize {
        usize::from(self.outline.is_fallback())
            + self.sections.iter().filter(|s| s.is_fallback()).count()
    }
}

/// Runs outline generation followed by one section call per entry.
///
/// Calls are made sequentially, so a request costs `1 + |outline|` oracle
/// calls.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use deckhand_core::GenerationRequest;
/// use deckhand_models::GeminiClient;
/// use deckhand_narrative::PresentationPipeline;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = PresentationPipeline::new(Arc::new(GeminiClient::from_env()?));
/// let request = GenerationRequest::new("Intro to Rust", "Rust").validate()?;
/// let draft = pipeline.generate(&request).await;
/// println!("{} sections", draft.sections().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PresentationPipeline {
    outline: OutlineGenerator,
    writer: SectionWriter,
}

impl PresentationPipeline {
    /// Build a pipeline sharing one oracle between both generators.
    pub fn new(driver: Arc<dyn DeckhandDriver>) -> Self {
        Self {
            outline: OutlineGenerator::new(Arc::clone(&driver)),
            writer: SectionWriter::new(driver),
        }
    }

    /// Generate the outline and every section body for `request`.
    #[instrument(skip(self, request), fields(title = request.title(), topic = request.topic()))]
    pub async fn generate(&self, request: &ValidatedRequest) -> PresentationDraft {
        let topic = request.topic();
        let outline = self.outline.generate_outline(topic).await;

        let mut sections = Vec::with_capacity(outline.value().len());
        for name in outline.value() {
            let body = self.writer.generate_content(name, topic).await;
            sections.push(body.map(|body| SectionContent::new(name.clone(), body)));
        }

        let draft = PresentationDraft {
            title: request.title().to_string(),
            topic: topic.to_string(),
            outline,
            sections,
        };
        info!(
            sections = draft.sections.len(),
            fallbacks = draft.fallback_count(),
            "Presentation text generated"
        );
        draft
    }
}
