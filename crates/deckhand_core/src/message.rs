//! Message types for conversation history.

use crate::{Input, Role};
use serde::{Deserialize, Serialize};

/// A message in an oracle conversation.
///
/// # Examples
///
/// ```
/// use deckhand_core::{Input, Message, Role};
///
/// let message = Message {
///     role: Role::User,
///     content: vec![Input::Text("Hello!".to_string())],
/// };
///
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The content of the message
    pub content: Vec<Input>,
}

impl Message {
    /// Create a message from its parts.
    pub fn new(role: Role, content: Vec<Input>) -> Self {
        Self { role, content }
    }

    /// A single-text user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Input::Text(text.into())])
    }
}
