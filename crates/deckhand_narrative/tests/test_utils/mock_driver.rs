//! Scripted text oracle for testing.

use async_trait::async_trait;
use deckhand_core::{GenerateRequest, GenerateResponse, Output};
use deckhand_error::{DeckhandError, DeckhandResult, GeminiError, GeminiErrorKind};
use deckhand_interface::DeckhandDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GeminiErrorKind),
    /// Return a sequence of responses, failing once it runs out
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GeminiErrorKind),
}

/// Mock oracle recording every prompt it receives.
pub struct MockDriver {
    behavior: MockBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockDriver {
    /// Create a mock that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received so far, in call order.
    #[allow(dead_code)]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn respond(response: &MockResponse) -> DeckhandResult<GenerateResponse> {
        match response {
            MockResponse::Success(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text.clone())],
            }),
            MockResponse::Error(kind) => Err(DeckhandError::from(GeminiError::new(kind.clone()))),
        }
    }
}

#[async_trait]
impl DeckhandDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> DeckhandResult<GenerateResponse> {
        let prompt = req
            .messages
            .first()
            .and_then(|m| m.content.first())
            .map(|input| input.as_text().to_string())
            .unwrap_or_default();

        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt);
            prompts.len() - 1
        };

        match &self.behavior {
            MockBehavior::Success(text) => Self::respond(&MockResponse::Success(text.clone())),
            MockBehavior::Error(kind) => Self::respond(&MockResponse::Error(kind.clone())),
            MockBehavior::Sequence(responses) => match responses.get(call) {
                Some(response) => Self::respond(response),
                None => Self::respond(&MockResponse::Error(GeminiErrorKind::ApiRequest(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    call + 1,
                    responses.len()
                )))),
            },
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
