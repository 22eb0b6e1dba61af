//! Request and response types for oracle generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// Generic generation request.
///
/// # Examples
///
/// ```
/// use deckhand_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest {
///     messages: vec![Message::user("Hello!")],
///     max_tokens: Some(100),
///     temperature: Some(0.7),
///     model: None,
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default, setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier override
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// A request holding one user prompt and provider defaults.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            ..Default::default()
        }
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use deckhand_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("Intro, Body, Outro".to_string())],
/// };
///
/// assert_eq!(response.text(), "Intro, Body, Outro");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Concatenation of every text output, in order.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .map(|output| match output {
                Output::Text(text) => text.as_str(),
            })
            .collect()
    }
}
