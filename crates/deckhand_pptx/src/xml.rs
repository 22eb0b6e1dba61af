//! XML text helpers.

use deckhand_error::{SerializationError, SerializationErrorKind};

/// Escape XML special characters.
///
/// Control characters other than tab, newline and carriage return are not
/// allowed in XML 1.0 and are dropped.
///
/// # Examples
///
/// ```
/// use deckhand_pptx::escape_xml;
///
/// assert_eq!(escape_xml(r#"<Q&A "live">"#), "&lt;Q&amp;A &quot;live&quot;&gt;");
/// ```
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Map a formatting failure while building `part`.
#[track_caller]
pub(crate) fn xml_error(part: &str, e: std::fmt::Error) -> SerializationError {
    SerializationError::new(SerializationErrorKind::Xml {
        part: part.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_disallowed_control_characters() {
        assert_eq!(escape_xml("a\u{0}b\u{1b}c"), "abc");
        assert_eq!(escape_xml("tab\there"), "tab\there");
    }

    #[test]
    fn keeps_non_ascii() {
        assert_eq!(escape_xml("Café ☕"), "Café ☕");
    }
}
