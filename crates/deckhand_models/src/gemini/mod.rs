//! Google Gemini REST client.
//!
//! [`GeminiClient`] calls the `generateContent` endpoint for one model. It
//! performs no retries and no rate limiting: a failed call surfaces as a
//! [`GeminiError`](deckhand_error::GeminiError) and the caller decides what
//! to do with it.

mod client;
mod config;
mod dto;

pub use client::GeminiClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GeminiConfigBuilder};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, deckhand_error::GeminiError>;
