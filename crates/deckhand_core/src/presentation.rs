//! The presentation data model shared by the pipeline stages.

use deckhand_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Message returned when either request field is missing or blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and topic are required";

/// Body of a `POST /generate` call.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported through [`GenerationRequest::validate`] rather than as a
/// deserialization failure.
///
/// # Examples
///
/// ```
/// use deckhand_core::GenerationRequest;
///
/// let request: GenerationRequest =
///     serde_json::from_str(r#"{"title": " My Talk ", "topic": "Rust"}"#).unwrap();
/// let valid = request.validate().unwrap();
/// assert_eq!(valid.title(), "My Talk");
///
/// let missing: GenerationRequest = serde_json::from_str(r#"{"topic": "Rust"}"#).unwrap();
/// assert!(missing.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Deck title shown on the welcome slide
    #[serde(default)]
    pub title: Option<String>,
    /// Subject the oracle writes about
    #[serde(default)]
    pub topic: Option<String>,
}

impl GenerationRequest {
    /// Build a request from both fields.
    pub fn new(title: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            topic: Some(topic.into()),
        }
    }

    /// Check that both fields are present and non-blank.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying [`REQUIRED_FIELDS_MESSAGE`].
    #[track_caller]
    pub fn validate(&self) -> Result<ValidatedRequest, ValidationError> {
        let title = self.title.as_deref().map(str::trim).unwrap_or_default();
        let topic = self.topic.as_deref().map(str::trim).unwrap_or_default();

        if title.is_empty() || topic.is_empty() {
            return Err(ValidationError::new(REQUIRED_FIELDS_MESSAGE));
        }

        Ok(ValidatedRequest {
            title: title.to_string(),
            topic: topic.to_string(),
        })
    }
}

/// A request whose title and topic are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedRequest {
    title: String,
    topic: String,
}

impl ValidatedRequest {
    /// Deck title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Deck topic.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

/// Generated body text for one outline section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionContent {
    /// Section name from the outline
    pub section: String,
    /// Paragraph written for the section
    pub body: String,
}

impl SectionContent {
    /// Pair a section name with its body.
    pub fn new(section: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            body: body.into(),
        }
    }
}
