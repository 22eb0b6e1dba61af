//! RGB colors.

use serde::{Deserialize, Serialize};

/// An opaque RGB color. Displays as the six-digit hex form used in
/// DrawingML (`0D47A1`).
///
/// # Examples
///
/// ```
/// use deckhand_layout::Color;
///
/// assert_eq!(Color::rgb(13, 71, 161).to_string(), "0D47A1");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{:02X}{:02X}{:02X}", r, g, b)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
