//! Download filename derived from the deck title.

use crate::PPTX_EXTENSION;

/// Filename offered for a deck: spaces become underscores and
/// `_Presentation.pptx` is appended.
///
/// Double quotes, backslashes and control characters are dropped so the
/// name can sit inside a quoted `Content-Disposition` parameter.
///
/// # Examples
///
/// ```
/// use deckhand_pptx::download_filename;
///
/// assert_eq!(download_filename("My Talk"), "My_Talk_Presentation.pptx");
/// assert_eq!(download_filename(r#"The "Best" Talk"#), "The_Best_Talk_Presentation.pptx");
/// ```
pub fn download_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .filter(|c| !matches!(c, '"' | '\\') && !c.is_control())
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();
    format!("{stem}_Presentation.{PPTX_EXTENSION}")
}
