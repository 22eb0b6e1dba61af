//! Narrative generation for Deckhand.
//!
//! Turns a validated title and topic into deck text by asking a text oracle
//! for an outline and then for one paragraph per outline entry. The
//! generators never fail: oracle errors are replaced by fixed content and
//! reported as [`Generated::Fallback`](deckhand_core::Generated::Fallback).
//!
//! ```
//! use deckhand_narrative::parse_outline;
//!
//! let sections = parse_outline("Intro, Ownership, , Borrowing ");
//! assert_eq!(sections, vec!["Intro", "Ownership", "Borrowing"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod outline;
mod pipeline;
mod prompts;
mod section;

pub use outline::{FALLBACK_OUTLINE, OutlineGenerator, fallback_outline, parse_outline};
pub use pipeline::{PresentationDraft, PresentationPipeline};
pub use prompts::{outline_prompt, section_placeholder, section_prompt};
pub use section::SectionWriter;
