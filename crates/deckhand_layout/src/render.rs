//! Per-variant layout functions.
//!
//! All measurements are in inches on a 10in by 7.5in slide.

use tracing::instrument;

use crate::{
    Alignment, LineStyle, Rect, Shape, ShapeKind, Slide, SlideSpec, TextBody, TextStyle, Theme,
    points,
};

/// Cards per row on the outline slide.
pub const GRID_COLUMNS: usize = 3;

/// Row and column of outline entry `index` on the card grid.
///
/// # Examples
///
/// ```
/// use deckhand_layout::grid_position;
///
/// assert_eq!(grid_position(0), (0, 0));
/// assert_eq!(grid_position(4), (1, 1));
/// assert_eq!(grid_position(12), (4, 0));
/// ```
pub fn grid_position(index: usize) -> (usize, usize) {
    (index / GRID_COLUMNS, index % GRID_COLUMNS)
}

/// Lay out one slide.
#[instrument(level = "trace", skip_all, fields(slide = %spec))]
pub fn render(spec: &SlideSpec, theme: &Theme) -> Slide {
    match spec {
        SlideSpec::Welcome { title } => welcome_slide(title, theme),
        SlideSpec::Outline { topic, sections } => outline_slide(topic, sections, theme),
        SlideSpec::Content { section, body } => content_slide(section, body, theme),
        SlideSpec::ThankYou => thank_you_slide(theme),
    }
}

/// Primary background, the title in large white bold text, and the motif.
pub fn welcome_slide(title: &str, theme: &Theme) -> Slide {
    banner_slide(title, 48, theme)
}

/// Same as the welcome slide with a fixed closing message.
pub fn thank_you_slide(theme: &Theme) -> Slide {
    banner_slide("Thank You", 60, theme)
}

fn banner_slide(text: &str, size: u16, theme: &Theme) -> Slide {
    let style = TextStyle::new(size, *theme.white(), Alignment::Center).bold();
    let mut shapes = vec![Shape::text_box(
        Rect::inches(1.0, 2.0, 8.0, 2.0),
        TextBody::new(text, style),
    )];
    shapes.extend(decorative_motif(theme));
    Slide::new(*theme.primary(), shapes)
}

/// Header plus a grid of numbered cards, three per row.
///
/// Rows continue downward without bound; 13 entries reach past the bottom
/// edge of the slide.
pub fn outline_slide(topic: &str, sections: &[String], theme: &Theme) -> Slide {
    let header_style = TextStyle::new(28, *theme.primary(), Alignment::Left).bold();
    let card_style = TextStyle::new(14, *theme.black(), Alignment::Center);

    let mut shapes = Vec::with_capacity(sections.len() + 2);
    shapes.push(Shape::text_box(
        Rect::inches(0.5, 0.5, 9.0, 1.0),
        TextBody::new(&format!("Presentation Outline: {topic}"), header_style),
    ));

    for (index, name) in sections.iter().enumerate() {
        let (row, col) = grid_position(index);
        let rect = Rect::inches(0.5 + col as f64 * 3.0, 1.8 + row as f64 * 1.8, 2.8, 1.5);
        shapes.push(
            Shape::new(ShapeKind::RoundedRectangle, rect)
                .with_fill(*theme.white())
                .with_line(LineStyle::with_width(*theme.primary(), points(1.5)))
                .with_text(
                    TextBody::new(&format!("{}. {}", index + 1, name), card_style).wrapped(),
                ),
        );
    }

    shapes.push(watermark(theme));
    Slide::new(*theme.light(), shapes)
}

/// Section title, accent bar and a rounded panel holding the paragraph.
pub fn content_slide(section: &str, body: &str, theme: &Theme) -> Slide {
    let title_style = TextStyle::new(32, *theme.primary(), Alignment::Left).bold();
    let body_style = TextStyle::new(18, *theme.body(), Alignment::Left);

    let shapes = vec![
        Shape::text_box(
            Rect::inches(0.5, 0.5, 9.0, 1.0),
            TextBody::new(section, title_style),
        ),
        Shape::new(ShapeKind::Rectangle, Rect::inches(0.5, 1.3, 9.0, 0.1))
            .with_fill(*theme.accent()),
        Shape::new(ShapeKind::RoundedRectangle, Rect::inches(0.8, 1.8, 8.5, 4.5))
            .with_fill(*theme.light())
            .with_line(LineStyle::new(*theme.grey()))
            .with_text(TextBody::new(body, body_style).wrapped()),
        watermark(theme),
    ];
    Slide::new(*theme.white(), shapes)
}

/// Three accent circles along the bottom edge.
pub fn decorative_motif(theme: &Theme) -> Vec<Shape> {
    (0..3u8)
        .map(|i| {
            Shape::new(
                ShapeKind::Ellipse,
                Rect::inches(0.5 + f64::from(i) * 3.0, 6.5, 0.5, 0.5),
            )
            .with_fill(*theme.accent())
            .with_line(LineStyle::new(*theme.accent()))
        })
        .collect()
}

/// Small grey attribution text in the bottom-right corner.
pub fn watermark(theme: &Theme) -> Shape {
    let style = TextStyle::new(10, *theme.grey(), Alignment::Right);
    Shape::text_box(
        Rect::inches(8.0, 6.8, 2.0, 0.5),
        TextBody::new(theme.watermark(), style),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, inches};

    #[test]
    fn grid_wraps_every_three() {
        let positions: Vec<_> = (0..7).map(grid_position).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0)]
        );
    }

    #[test]
    fn fifth_card_sits_in_middle_of_second_row() {
        let sections: Vec<String> = (1..=5).map(|i| format!("S{i}")).collect();
        let slide = outline_slide("Rust", &sections, &Theme::default());
        // header, five cards, watermark
        assert_eq!(slide.shapes().len(), 7);
        let card = &slide.shapes()[5];
        assert_eq!(card.rect().left, inches(3.5));
        assert_eq!(card.rect().top, inches(3.6));
        assert_eq!(card.text_content().as_deref(), Some("5. S5"));
    }

    #[test]
    fn card_outline_is_primary_one_and_a_half_points() {
        let slide = outline_slide("Rust", &["Intro".to_string()], &Theme::default());
        let line = slide.shapes()[1].line().as_ref().expect("card outline");
        assert_eq!(line.color, Color::rgb(13, 71, 161));
        assert_eq!(line.width, 19_050);
    }

    #[test]
    fn motif_is_three_accent_ellipses() {
        let motif = decorative_motif(&Theme::default());
        assert_eq!(motif.len(), 3);
        assert!(motif.iter().all(|s| *s.kind() == ShapeKind::Ellipse));
        assert_eq!(motif[2].rect().left, inches(6.5));
        assert_eq!(motif[0].rect().top, inches(6.5));
    }
}
