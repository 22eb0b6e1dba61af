//! Deckhand: PowerPoint decks from a title and a topic.
//!
//! A text oracle (Google Gemini) writes an outline and one paragraph per
//! section; the deck is laid out and packaged as `.pptx`. The same pipeline
//! backs the HTTP form (`deckhand serve`) and one-shot rendering
//! (`deckhand render`).
//!
//! # Architecture
//!
//! - `deckhand_error` - Error types
//! - `deckhand_core` - Requests, messages and generation outcomes
//! - `deckhand_interface` - `DeckhandDriver` trait
//! - `deckhand_models` - Gemini client
//! - `deckhand_narrative` - Outline and section generation
//! - `deckhand_layout` - Slide geometry and styling
//! - `deckhand_pptx` - `.pptx` packaging
//! - `deckhand_server` - HTTP front end
//!
//! This crate adds configuration loading and logging setup, and re-exports
//! the rest for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod config;
mod observability;

pub use app::{build_state, render_deck, write_deck};
pub use config::{DeckhandConfig, LayoutConfig, LoggingConfig, OracleConfig};
pub use observability::{ObservabilityConfig, init_observability};

pub use deckhand_core::*;
pub use deckhand_error::*;
pub use deckhand_interface::*;
pub use deckhand_layout::{Deck, Theme};
pub use deckhand_models::{GeminiClient, GeminiConfig};
pub use deckhand_narrative::{PresentationDraft, PresentationPipeline};
pub use deckhand_pptx::{PPTX_MIME, download_filename};
pub use deckhand_server::{AppState, BuiltDeck, ServerConfig, create_router, serve};
