//! Trait definitions for Deckhand text oracles.
//!
//! A text oracle takes a prompt and returns generated text. Every provider
//! implements [`DeckhandDriver`]; the pipeline only ever calls
//! [`DeckhandDriver::complete`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::DeckhandDriver;
