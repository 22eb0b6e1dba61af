//! Positioned shapes and their text.

use serde::{Deserialize, Serialize};

use crate::{Color, DEFAULT_LINE_WIDTH, Emu, Rect};

/// Geometry of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ShapeKind {
    /// Borderless, unfilled text frame
    #[display("text box")]
    TextBox,
    /// Plain rectangle
    #[display("rectangle")]
    Rectangle,
    /// Rectangle with rounded corners
    #[display("rounded rectangle")]
    RoundedRectangle,
    /// Ellipse inscribed in the bounding box
    #[display("ellipse")]
    Ellipse,
}

/// Horizontal text alignment within a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Flush left
    #[default]
    Left,
    /// Centered
    Center,
    /// Flush right
    Right,
}

/// Outline drawn around a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub width: Emu,
}

impl LineStyle {
    /// Line of the given color at the default width.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Line of the given color and width.
    pub fn with_width(color: Color, width: Emu) -> Self {
        Self { color, width }
    }
}

/// Character and paragraph formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points
    pub size: u16,
    /// Bold weight
    pub bold: bool,
    /// Text color
    pub color: Color,
    /// Paragraph alignment
    pub alignment: Alignment,
}

impl TextStyle {
    /// Regular-weight text.
    pub fn new(size: u16, color: Color, alignment: Alignment) -> Self {
        Self {
            size,
            bold: false,
            color,
            alignment,
        }
    }

    /// Same style in bold.
    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

/// One paragraph holding a single run of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text of the run
    pub text: String,
    /// Formatting of the run and paragraph
    pub style: TextStyle,
}

/// Text content of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct TextBody {
    /// Paragraphs in reading order
    paragraphs: Vec<Paragraph>,
    /// Whether lines wrap at the shape's width
    word_wrap: bool,
}

impl TextBody {
    /// Text body with one paragraph per line of `text`, all in `style`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckhand_layout::{Alignment, Color, TextBody, TextStyle};
    ///
    /// let style = TextStyle::new(18, Color::rgb(33, 33, 33), Alignment::Left);
    /// let body = TextBody::new("first\nsecond", style);
    /// assert_eq!(body.paragraphs().len(), 2);
    /// assert_eq!(body.text(), "first\nsecond");
    /// ```
    pub fn new(text: &str, style: TextStyle) -> Self {
        let paragraphs = text
            .split('\n')
            .map(|line| Paragraph {
                text: line.trim_end_matches('\r').to_string(),
                style,
            })
            .collect();
        Self {
            paragraphs,
            word_wrap: false,
        }
    }

    /// Enable wrapping at the shape's width.
    pub fn wrapped(self) -> Self {
        Self {
            word_wrap: true,
            ..self
        }
    }

    /// All paragraph text joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A positioned shape on a slide.
///
/// Start from [`Shape::new`] and chain the `with_` setters:
///
/// ```
/// use deckhand_layout::{Color, LineStyle, Rect, Shape, ShapeKind};
///
/// let bar = Shape::new(ShapeKind::Rectangle, Rect::inches(0.5, 1.3, 9.0, 0.1))
///     .with_fill(Color::rgb(255, 152, 0))
///     .with_line(LineStyle::new(Color::rgb(255, 152, 0)));
///
/// assert_eq!(*bar.kind(), ShapeKind::Rectangle);
/// assert!(bar.text().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", strip_option)]
pub struct Shape {
    /// Geometry
    #[setters(skip)]
    kind: ShapeKind,
    /// Position and size
    #[setters(skip)]
    rect: Rect,
    /// Solid fill, or no fill
    fill: Option<Color>,
    /// Outline, or no outline
    line: Option<LineStyle>,
    /// Text content
    text: Option<TextBody>,
}

impl Shape {
    /// Unfilled, unoutlined shape without text.
    pub fn new(kind: ShapeKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            fill: None,
            line: None,
            text: None,
        }
    }

    /// Text box holding `body`.
    pub fn text_box(rect: Rect, body: TextBody) -> Self {
        Self::new(ShapeKind::TextBox, rect).with_text(body)
    }

    /// Text of the shape, if any.
    pub fn text_content(&self) -> Option<String> {
        self.text.as_ref().map(TextBody::text)
    }
}
