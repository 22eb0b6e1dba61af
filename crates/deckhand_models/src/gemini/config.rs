//! Connection settings for the Gemini client.

use std::time::Duration;

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for [`GeminiClient`](super::GeminiClient).
///
/// # Examples
///
/// ```
/// use deckhand_models::GeminiConfig;
///
/// let config = GeminiConfig::builder()
///     .api_key(Some("test-key".to_string()))
///     .model("gemini-2.5-flash")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), "gemini-2.5-flash");
/// assert_eq!(config.base_url(), deckhand_models::DEFAULT_BASE_URL);
/// ```
#[derive(Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key; `None` defers the failure to the first call
    #[builder(default)]
    api_key: Option<String>,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL without a trailing slash
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Per-request timeout, unset by default
    #[builder(default)]
    timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Creates a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
