//! Top-level error wrapper types.

use crate::{
    ConfigError, GeminiError, HttpError, SerializationError, ServerError, ValidationError,
};

/// All error conditions that can cross crate boundaries.
///
/// # Examples
///
/// ```
/// use deckhand_error::{DeckhandError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: DeckhandError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum DeckhandErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Text oracle error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Invalid request input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Deck serialization failure
    #[from(SerializationError)]
    Serialization(SerializationError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Deckhand error with kind discrimination.
///
/// # Examples
///
/// ```
/// use deckhand_error::{DeckhandErrorKind, DeckhandResult, ValidationError};
///
/// fn might_fail() -> DeckhandResult<()> {
///     Err(ValidationError::new("Title and topic are required"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), DeckhandErrorKind::Validation(_)));
/// assert_eq!(err.message(), "Title and topic are required");
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Deckhand Error: {}", _0)]
pub struct DeckhandError(Box<DeckhandErrorKind>);

impl DeckhandError {
    /// Create a new error from a kind.
    pub fn new(kind: DeckhandErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DeckhandErrorKind {
        &self.0
    }

    /// Whether this error was caused by bad client input.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), DeckhandErrorKind::Validation(_))
    }

    /// Error text without the source location, suitable for API payloads.
    pub fn message(&self) -> String {
        match self.kind() {
            DeckhandErrorKind::Http(e) => e.message.clone(),
            DeckhandErrorKind::Config(e) => e.message.clone(),
            DeckhandErrorKind::Gemini(e) => e.kind.to_string(),
            DeckhandErrorKind::Validation(e) => e.message.clone(),
            DeckhandErrorKind::Serialization(e) => e.kind.to_string(),
            DeckhandErrorKind::Server(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to DeckhandErrorKind
impl<T> From<T> for DeckhandError
where
    T: Into<DeckhandErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Deckhand operations.
pub type DeckhandResult<T> = std::result::Result<T, DeckhandError>;
