//! Deck serialization errors.

/// Serialization failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SerializationErrorKind {
    /// Writing an entry into the package archive failed
    #[display("Failed to write package entry '{}': {}", part, message)]
    Archive {
        /// Part name inside the package
        part: String,
        /// Underlying error text
        message: String,
    },
    /// Formatting XML for a part failed
    #[display("Failed to build XML for '{}': {}", part, message)]
    Xml {
        /// Part name inside the package
        part: String,
        /// Underlying error text
        message: String,
    },
    /// A deck without slides cannot be written
    #[display("Deck contains no slides")]
    EmptyDeck,
}

/// Serialization error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Serialization Error: {} at line {} in {}", kind, line, file)]
pub struct SerializationError {
    /// The kind of error that occurred
    pub kind: SerializationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SerializationError {
    /// Create a new SerializationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SerializationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
