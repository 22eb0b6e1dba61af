//! Ordered slide sequence of one presentation.

use deckhand_core::SectionContent;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Slide, SlideSpec, Theme, render};

/// The slides of a presentation in display order:
/// welcome, outline, one content slide per section, thank you.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Deck {
    /// Slide descriptions in order
    slides: Vec<SlideSpec>,
}

impl Deck {
    /// Assemble the deck for a title, a topic and the generated sections.
    ///
    /// The outline slide lists the section names in the order given.
    pub fn from_content(title: &str, topic: &str, sections: &[SectionContent]) -> Self {
        let mut slides = Vec::with_capacity(sections.len() + 3);
        slides.push(SlideSpec::Welcome {
            title: title.to_string(),
        });
        slides.push(SlideSpec::Outline {
            topic: topic.to_string(),
            sections: sections.iter().map(|s| s.section.clone()).collect(),
        });
        slides.extend(sections.iter().map(|s| SlideSpec::Content {
            section: s.section.clone(),
            body: s.body.clone(),
        }));
        slides.push(SlideSpec::ThankYou);

        debug!(slides = slides.len(), "Deck assembled");
        Self { slides }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides. Never true for assembled decks.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Lay out every slide in order.
    pub fn render_all(&self, theme: &Theme) -> Vec<Slide> {
        self.slides.iter().map(|spec| render(spec, theme)).collect()
    }
}
