//! English Metric Units and slide geometry.

use serde::{Deserialize, Serialize};

/// Length in English Metric Units.
pub type Emu = i64;

/// EMU in one inch.
pub const EMU_PER_INCH: Emu = 914_400;

/// EMU in one typographic point.
pub const EMU_PER_POINT: Emu = 12_700;

/// Slide width, 10 inches.
pub const SLIDE_WIDTH: Emu = 10 * EMU_PER_INCH;

/// Slide height, 7.5 inches.
pub const SLIDE_HEIGHT: Emu = 6_858_000;

/// Outline width used when a shape does not set one (0.75pt).
pub const DEFAULT_LINE_WIDTH: Emu = 9_525;

/// Convert inches to EMU, rounding to the nearest unit.
///
/// # Examples
///
/// ```
/// use deckhand_layout::inches;
///
/// assert_eq!(inches(1.0), 914_400);
/// assert_eq!(inches(0.5), 457_200);
/// ```
pub fn inches(value: f64) -> Emu {
    (value * EMU_PER_INCH as f64).round() as Emu
}

/// Convert points to EMU, rounding to the nearest unit.
pub fn points(value: f64) -> Emu {
    (value * EMU_PER_POINT as f64).round() as Emu
}

/// Position and size of a shape, in EMU from the slide's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the left edge
    pub left: Emu,
    /// Distance from the top edge
    pub top: Emu,
    /// Horizontal extent
    pub width: Emu,
    /// Vertical extent
    pub height: Emu,
}

impl Rect {
    /// Rectangle from values in inches.
    pub fn inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left: inches(left),
            top: inches(top),
            width: inches(width),
            height: inches(height),
        }
    }
}
