//! Trait definitions for language model backends.

use async_trait::async_trait;
use deckhand_core::{GenerateRequest, GenerateResponse};
use deckhand_error::{DeckhandResult, GeminiError, GeminiErrorKind};

/// Core trait that all text oracle backends implement.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use deckhand_core::{GenerateRequest, GenerateResponse, Output};
/// use deckhand_error::DeckhandResult;
/// use deckhand_interface::DeckhandDriver;
///
/// struct Echo;
///
/// #[async_trait]
/// impl DeckhandDriver for Echo {
///     async fn generate(&self, req: &GenerateRequest) -> DeckhandResult<GenerateResponse> {
///         let text = req.messages[0].content[0].as_text().to_string();
///         Ok(GenerateResponse { outputs: vec![Output::Text(text)] })
///     }
///
///     fn provider_name(&self) -> &'static str { "echo" }
///     fn model_name(&self) -> &str { "echo" }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// assert_eq!(Echo.complete("ping").await.unwrap(), "ping");
/// # }
/// ```
#[async_trait]
pub trait DeckhandDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> DeckhandResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;

    /// Send a single prompt and return the generated text.
    ///
    /// # Errors
    ///
    /// Fails when the backend fails, or with [`GeminiErrorKind::EmptyResponse`]
    /// when the reply holds no text.
    async fn complete(&self, prompt: &str) -> DeckhandResult<String> {
        let response = self.generate(&GenerateRequest::from_prompt(prompt)).await?;
        let text = response.text();
        if text.trim().is_empty() {
            tracing::warn!(
                provider = self.provider_name(),
                model = self.model_name(),
                "Oracle returned no text"
            );
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse).into());
        }
        Ok(text)
    }
}
