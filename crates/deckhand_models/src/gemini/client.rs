//! Google Gemini API implementation.

use async_trait::async_trait;
use tracing::{debug, error, instrument};

use deckhand_core::{GenerateRequest, GenerateResponse, Input, Output, Role};
use deckhand_error::{DeckhandResult, GeminiError, GeminiErrorKind};
use deckhand_interface::DeckhandDriver;

use super::GeminiResult;
use super::config::GeminiConfig;
use super::dto::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};

/// Client for the Gemini `generateContent` REST endpoint.
///
/// One client serves one model. It is cheap to clone and is shared
/// read-only between requests.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Create a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP client cannot be constructed.
    #[instrument(name = "gemini_client_new", skip(config), fields(model = %config.model()))]
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(*timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!("Created Gemini client");
        Ok(Self { config, http })
    }

    /// Create a client reading `GEMINI_API_KEY`, failing if it is unset.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when the variable is absent.
    pub fn from_env() -> DeckhandResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        let config = GeminiConfig::builder()
            .api_key(Some(api_key))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        Ok(Self::new(config)?)
    }

    /// Create a client whose key is read from `GEMINI_API_KEY` if present.
    ///
    /// A missing key is not an error here; every call then fails with
    /// [`GeminiErrorKind::MissingApiKey`].
    pub fn lazy_from_env(config: GeminiConfig) -> GeminiResult<Self> {
        let config = if config.api_key().is_some() {
            config
        } else {
            GeminiConfig::builder()
                .api_key(std::env::var("GEMINI_API_KEY").ok())
                .model(config.model().clone())
                .base_url(config.base_url().clone())
                .timeout(*config.timeout())
                .build()
                .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?
        };
        if config.api_key().is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; oracle calls will fall back");
        }
        Self::new(config)
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            model
        )
    }

    /// Translate a generic request into the Gemini wire format.
    fn to_wire(req: &GenerateRequest) -> GenerateContentRequest {
        let mut contents = Vec::new();
        let mut system_parts = Vec::new();

        for msg in req.messages() {
            let parts: Vec<Part> = msg
                .content
                .iter()
                .map(|input| match input {
                    Input::Text(text) => Part {
                        text: Some(text.clone()),
                    },
                })
                .collect();

            match msg.role {
                Role::System => system_parts.extend(parts),
                Role::User => contents.push(Content {
                    role: Some("user".to_string()),
                    parts,
                }),
                Role::Assistant => contents.push(Content {
                    role: Some("model".to_string()),
                    parts,
                }),
            }
        }

        let system_instruction = (!system_parts.is_empty()).then(|| Content {
            role: None,
            parts: system_parts,
        });

        let generation_config = (req.max_tokens().is_some() || req.temperature().is_some())
            .then(|| GenerationConfig {
                max_output_tokens: *req.max_tokens(),
                temperature: *req.temperature(),
            });

        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config,
        }
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let api_key = self
            .config
            .api_key()
            .as_deref()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let model = req.model().as_deref().unwrap_or(self.config.model().as_str());
        let url = self.endpoint(model);
        debug!(url = %url, "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&Self::to_wire(req))
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {}", e);
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            error!(status = status.as_u16(), message = %message, "Gemini returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!("Failed to parse response: {}", e);
            GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string()))
        })?;

        if let Some(reason) = body
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.clone())
        {
            return Err(GeminiError::new(GeminiErrorKind::Blocked(reason)));
        }

        let text = body
            .first_text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

        debug!(
            chars = text.len(),
            finish_reason = ?body.candidates.first().and_then(|c| c.finish_reason.clone()),
            "Gemini response received"
        );

        Ok(GenerateResponse {
            outputs: vec![Output::Text(text)],
        })
    }
}

#[async_trait]
impl DeckhandDriver for GeminiClient {
    #[instrument(
        name = "gemini_generate",
        skip(self, req),
        fields(model = %self.config.model(), messages = req.messages().len())
    )]
    async fn generate(&self, req: &GenerateRequest) -> DeckhandResult<GenerateResponse> {
        Ok(self.generate_internal(req).await?)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_core::Message;

    fn client(base_url: &str) -> GeminiClient {
        let config = GeminiConfig::builder()
            .api_key(Some("key".to_string()))
            .base_url(base_url)
            .build()
            .unwrap();
        GeminiClient::new(config).unwrap()
    }

    #[test]
    fn endpoint_strips_models_prefix_and_trailing_slash() {
        let client = client("http://localhost:9000/v1beta/");
        assert_eq!(
            client.endpoint("models/gemini-2.0-flash"),
            "http://localhost:9000/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn system_messages_become_system_instruction() {
        let req = GenerateRequest {
            messages: vec![
                Message::new(Role::System, vec![Input::Text("Be brief".to_string())]),
                Message::user("Outline Rust"),
            ],
            ..Default::default()
        };
        let wire = GeminiClient::to_wire(&req);
        assert_eq!(wire.contents.len(), 1);
        assert_eq!(wire.contents[0].role.as_deref(), Some("user"));
        assert!(wire.system_instruction.is_some());
        assert!(wire.generation_config.is_none());
    }

    #[test]
    fn wire_request_uses_camel_case() {
        let req = GenerateRequest {
            messages: vec![Message::user("hi")],
            max_tokens: Some(32),
            ..Default::default()
        };
        let json = serde_json::to_value(GeminiClient::to_wire(&req)).unwrap();
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 32);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }
}
