//! Request validation errors.

/// A user-correctable problem with an incoming request.
///
/// The `message` is shown to the caller verbatim, so it never carries the
/// source location; that only appears in the `Display` output for logs.
///
/// # Examples
///
/// ```
/// use deckhand_error::ValidationError;
///
/// let err = ValidationError::new("Title and topic are required");
/// assert_eq!(err.message, "Title and topic are required");
/// assert!(format!("{}", err).starts_with("Validation Error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// Message suitable for the client
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
