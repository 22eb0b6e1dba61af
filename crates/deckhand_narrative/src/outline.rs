//! Outline generation.

use std::sync::Arc;

use deckhand_core::Generated;
use deckhand_interface::DeckhandDriver;
use tracing::{debug, instrument, warn};

use crate::prompts::outline_prompt;

/// Sections used when the oracle cannot produce an outline.
pub const FALLBACK_OUTLINE: [&str; 9] = [
    "Introduction",
    "Key Concepts",
    "Current Trends",
    "Applications",
    "Case Studies",
    "Benefits",
    "Challenges",
    "Future Directions",
    "Conclusion",
];

/// [`FALLBACK_OUTLINE`] as owned strings.
pub fn fallback_outline() -> Vec<String> {
    FALLBACK_OUTLINE.iter().map(|s| s.to_string()).collect()
}

/// Split a comma-separated oracle reply into section names.
///
/// Pieces are trimmed and empty pieces dropped. Commas inside a section name
/// are not supported and split it in two.
pub fn parse_outline(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Asks the oracle for the ordered section list of a presentation.
#[derive(Clone)]
pub struct OutlineGenerator {
    driver: Arc<dyn DeckhandDriver>,
}

impl OutlineGenerator {
    /// Create a generator over a shared oracle.
    pub fn new(driver: Arc<dyn DeckhandDriver>) -> Self {
        Self { driver }
    }

    /// Generate the outline for `topic`.
    ///
    /// Never fails. Any oracle error, or a reply with no usable pieces,
    /// yields [`FALLBACK_OUTLINE`].
    #[instrument(skip(self), fields(model = self.driver.model_name()))]
    pub async fn generate_outline(&self, topic: &str) -> Generated<Vec<String>> {
        match self.driver.complete(&outline_prompt(topic)).await {
            Ok(reply) => {
                let sections = parse_outline(&reply);
                if sections.is_empty() {
                    warn!("Oracle outline had no sections, using fallback outline");
                    return Generated::fallback(fallback_outline(), "outline reply had no sections");
                }
                debug!(sections = sections.len(), "Outline generated");
                Generated::Oracle(sections)
            }
            Err(e) => {
                warn!(error = %e, "Outline generation failed, using fallback outline");
                Generated::fallback(fallback_outline(), e.message())
            }
        }
    }
}

impl std::fmt::Debug for OutlineGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_pieces() {
        assert_eq!(
            parse_outline(" Intro ,Ownership,\nBorrowing\n"),
            vec!["Intro", "Ownership", "Borrowing"]
        );
    }

    #[test]
    fn parse_keeps_duplicates_and_order() {
        assert_eq!(parse_outline("B, A, B"), vec!["B", "A", "B"]);
    }

    #[test]
    fn parse_of_separators_only_is_empty() {
        assert!(parse_outline(" , ,, ").is_empty());
    }

    #[test]
    fn fallback_has_nine_entries() {
        let outline = fallback_outline();
        assert_eq!(outline.len(), 9);
        assert_eq!(outline.first().map(String::as_str), Some("Introduction"));
        assert_eq!(outline.last().map(String::as_str), Some("Conclusion"));
    }
}
