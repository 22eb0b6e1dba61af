//! Output types from oracle responses.

use serde::{Deserialize, Serialize};

/// Outputs returned by the oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}
