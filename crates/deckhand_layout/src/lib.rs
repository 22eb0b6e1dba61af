//! Slide layout engine for Deckhand.
//!
//! Layout is pure: a [`SlideSpec`] plus a [`Theme`] always renders to the
//! same [`Slide`], a background color and an ordered list of positioned
//! [`Shape`]s measured in EMU. No file format concerns live here.
//!
//! ```
//! use deckhand_core::SectionContent;
//! use deckhand_layout::{Deck, Theme};
//!
//! let sections = vec![SectionContent::new("Ownership", "Every value has an owner.")];
//! let deck = Deck::from_content("Intro to Rust", "Rust", &sections);
//!
//! let slides = deck.render_all(&Theme::default());
//! assert_eq!(slides.len(), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod color;
mod deck;
mod render;
mod shape;
mod slide;
mod theme;
mod units;

pub use color::Color;
pub use deck::Deck;
pub use render::{
    GRID_COLUMNS, content_slide, decorative_motif, grid_position, outline_slide, render,
    thank_you_slide, watermark, welcome_slide,
};
pub use shape::{Alignment, LineStyle, Paragraph, Shape, ShapeKind, TextBody, TextStyle};
pub use slide::{Slide, SlideSpec};
pub use theme::{DEFAULT_WATERMARK, Theme};
pub use units::{
    DEFAULT_LINE_WIDTH, EMU_PER_INCH, EMU_PER_POINT, Emu, Rect, SLIDE_HEIGHT, SLIDE_WIDTH,
    inches, points,
};
