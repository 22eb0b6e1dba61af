//! PresentationML writer for Deckhand.
//!
//! Serializes laid-out [`Slide`](deckhand_layout::Slide)s into a `.pptx`
//! package: an OPC zip archive holding the presentation part, one slide
//! master, one blank layout, a theme, document properties and one part per
//! slide. The whole package is built in memory; any failure aborts it.
//!
//! ```
//! use deckhand_core::SectionContent;
//! use deckhand_layout::{Deck, Theme};
//! use deckhand_pptx::{PackageOptions, serialize};
//!
//! let deck = Deck::from_content("Intro", "Rust", &[SectionContent::new("Ownership", "...")]);
//! let slides = deck.render_all(&Theme::default());
//! let bytes = serialize(&slides, &PackageOptions::new("Intro")).unwrap();
//! assert_eq!(&bytes[..2], b"PK");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod constants;
mod filename;
mod package;
mod parts;
mod slide;
mod writer;
mod xml;

pub use constants::{PPTX_EXTENSION, PPTX_MIME};
pub use filename::download_filename;
pub use writer::{PackageOptions, serialize};
pub use xml::escape_xml;
