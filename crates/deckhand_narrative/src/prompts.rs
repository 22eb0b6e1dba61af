//! Prompt templates sent to the text oracle.

/// Prompt asking for the section list of a presentation.
///
/// # Examples
///
/// ```
/// use deckhand_narrative::outline_prompt;
///
/// assert!(outline_prompt("Rust").ends_with("about Rust. Return as a comma-separated list."));
/// ```
pub fn outline_prompt(topic: &str) -> String {
    format!(
        "Generate 12-13 key sections/subtopics for a presentation about {topic}. \
         Return as a comma-separated list."
    )
}

/// Prompt asking for the paragraph of one section.
pub fn section_prompt(section: &str, topic: &str) -> String {
    format!(
        "Write a brief paragraph (3-4 sentences) about '{section}' in the context of {topic}."
    )
}

/// Body used when the oracle could not write a section.
pub fn section_placeholder(section: &str) -> String {
    format!("Content for {section} could not be generated. Please add details manually.")
}
