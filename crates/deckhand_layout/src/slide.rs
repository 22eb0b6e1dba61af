//! Slide descriptions and rendered slides.

use serde::{Deserialize, Serialize};

use crate::{Color, Shape};

/// What a slide shows, before layout.
///
/// The variant fixes colors, positions and font sizes; each variant carries
/// only its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideSpec {
    /// Opening slide with the deck title
    #[display("welcome")]
    Welcome {
        /// Deck title
        title: String,
    },
    /// Grid of numbered section cards
    #[display("outline")]
    Outline {
        /// Deck topic, shown in the header
        topic: String,
        /// Section names in order
        sections: Vec<String>,
    },
    /// One section with its paragraph
    #[display("content")]
    Content {
        /// Section name, used as the slide title
        section: String,
        /// Paragraph text
        body: String,
    },
    /// Closing slide
    #[display("thank you")]
    ThankYou,
}

/// A laid-out slide: background plus shapes in z-order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Slide {
    /// Solid background color
    background: Color,
    /// Shapes, back to front
    shapes: Vec<Shape>,
}

impl Slide {
    /// Slide with the given background and shapes.
    pub fn new(background: Color, shapes: Vec<Shape>) -> Self {
        Self { background, shapes }
    }

    /// Text of every shape that has some, in z-order.
    pub fn texts(&self) -> Vec<String> {
        self.shapes.iter().filter_map(Shape::text_content).collect()
    }
}
