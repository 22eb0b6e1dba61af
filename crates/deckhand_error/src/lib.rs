//! Error types for the Deckhand presentation generator.
//!
//! This crate provides the foundation error types used throughout the Deckhand workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use deckhand_error::{DeckhandResult, ValidationError};
//!
//! fn check(title: &str) -> DeckhandResult<()> {
//!     if title.trim().is_empty() {
//!         Err(ValidationError::new("Title and topic are required"))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("  ").is_err());
//! assert!(check("My Talk").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod http;
mod serialization;
mod server;
mod validation;

pub use config::ConfigError;
pub use error::{DeckhandError, DeckhandErrorKind, DeckhandResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use serialization::{SerializationError, SerializationErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use validation::ValidationError;
