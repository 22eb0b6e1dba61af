//! Text oracle provider integrations for Deckhand.
//!
//! Each provider lives behind its own feature flag. Gemini is the only
//! provider and is enabled by default.
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use deckhand_interface::DeckhandDriver;
//! use deckhand_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env()?;
//! let text = client.complete("Name three planets, comma separated.").await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig, GeminiConfigBuilder,
    GeminiResult,
};
