//! Outcome of a generation step that may have fallen back to fixed content.

use serde::{Deserialize, Serialize};

/// A value produced by the oracle, or fixed content standing in for it.
///
/// Generation steps never fail: when the oracle is unavailable they return
/// `Fallback` with the reason, so callers can tell the two apart without
/// inspecting logs.
///
/// # Examples
///
/// ```
/// use deckhand_core::Generated;
///
/// let ok = Generated::Oracle("text".to_string());
/// let fallback = Generated::fallback("placeholder".to_string(), "quota exceeded");
///
/// assert!(!ok.is_fallback());
/// assert!(fallback.is_fallback());
/// assert_eq!(fallback.reason(), Some("quota exceeded"));
/// assert_eq!(fallback.into_inner(), "placeholder");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "data", rename_all = "snake_case")]
pub enum Generated<T> {
    /// The oracle produced the value
    Oracle(T),
    /// Fixed content replaced the oracle's answer
    Fallback {
        /// Replacement value
        value: T,
        /// Why the oracle result was not used
        reason: String,
    },
}

impl<T> Generated<T> {
    /// Construct a fallback with its reason.
    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Generated::Fallback {
            value,
            reason: reason.into(),
        }
    }

    /// Borrow the carried value.
    pub fn value(&self) -> &T {
        match self {
            Generated::Oracle(value) | Generated::Fallback { value, .. } => value,
        }
    }

    /// Take the carried value.
    pub fn into_inner(self) -> T {
        match self {
            Generated::Oracle(value) | Generated::Fallback { value, .. } => value,
        }
    }

    /// Whether fixed content was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Generated::Fallback { .. })
    }

    /// Fallback reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Generated::Oracle(_) => None,
            Generated::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Transform the carried value, keeping the provenance.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Generated<U> {
        match self {
            Generated::Oracle(value) => Generated::Oracle(f(value)),
            Generated::Fallback { value, reason } => Generated::Fallback {
                value: f(value),
                reason,
            },
        }
    }
}
