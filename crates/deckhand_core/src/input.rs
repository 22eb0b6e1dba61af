//! Input types for oracle requests.

use serde::{Deserialize, Serialize};

/// Content sent to the oracle.
///
/// Only text is needed to write slides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),
}

impl Input {
    /// Text carried by this input.
    pub fn as_text(&self) -> &str {
        match self {
            Input::Text(text) => text,
        }
    }
}
