//! Palette and watermark shared by every slide.

use serde::{Deserialize, Serialize};

use crate::Color;

/// Watermark text used when none is configured.
pub const DEFAULT_WATERMARK: &str = "Generated by Deckhand";

/// Colors and the watermark text applied by the layout functions.
///
/// # Examples
///
/// ```
/// use deckhand_layout::{Color, Theme};
///
/// let theme = Theme::default().with_watermark("Acme Corp".to_string());
/// assert_eq!(theme.watermark(), "Acme Corp");
/// assert_eq!(*theme.primary(), Color::rgb(13, 71, 161));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct Theme {
    /// Deep blue used for title backgrounds, headings and card borders
    primary: Color,
    /// Orange used for the accent bar and the decorative motif
    accent: Color,
    /// Outline slide background and content panel fill
    light: Color,
    /// Plain white
    white: Color,
    /// Panel border and watermark text
    grey: Color,
    /// Paragraph text on content slides
    body: Color,
    /// Outline card text
    black: Color,
    /// Text of the corner watermark
    watermark: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::rgb(13, 71, 161),
            accent: Color::rgb(255, 152, 0),
            light: Color::rgb(240, 240, 240),
            white: Color::rgb(255, 255, 255),
            grey: Color::rgb(200, 200, 200),
            body: Color::rgb(33, 33, 33),
            black: Color::rgb(0, 0, 0),
            watermark: DEFAULT_WATERMARK.to_string(),
        }
    }
}
