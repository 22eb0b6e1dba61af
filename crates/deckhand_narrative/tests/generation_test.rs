// Outline, section and pipeline behavior against a scripted oracle.

mod test_utils;

use std::sync::Arc;

use deckhand_core::{GenerationRequest, SectionContent};
use deckhand_error::GeminiErrorKind;
use deckhand_narrative::{
    FALLBACK_OUTLINE, OutlineGenerator, PresentationPipeline, SectionWriter, outline_prompt,
    section_placeholder, section_prompt,
};
use test_utils::{MockDriver, MockResponse};

#[tokio::test]
async fn test_outline_from_oracle() {
    let mock = Arc::new(MockDriver::new_success("Intro, Ownership, Borrowing, Lifetimes"));
    let generator = OutlineGenerator::new(mock.clone());

    let outline = generator.generate_outline("Rust").await;

    assert!(!outline.is_fallback());
    assert_eq!(
        outline.value(),
        &vec!["Intro", "Ownership", "Borrowing", "Lifetimes"]
    );
    assert_eq!(mock.prompts(), vec![outline_prompt("Rust")]);
}

#[tokio::test]
async fn test_outline_falls_back_on_oracle_error() {
    let mock = Arc::new(MockDriver::new_error(GeminiErrorKind::ApiRequest(
        "connection refused".to_string(),
    )));
    let generator = OutlineGenerator::new(mock.clone());

    let outline = generator.generate_outline("Rust").await;

    assert!(outline.is_fallback());
    assert_eq!(outline.value().len(), 9);
    assert_eq!(outline.value()[0], FALLBACK_OUTLINE[0]);
    assert!(outline.reason().unwrap_or_default().contains("connection refused"));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_outline_falls_back_on_unusable_reply() {
    let generator = OutlineGenerator::new(Arc::new(MockDriver::new_success(" , ,")));

    let outline = generator.generate_outline("Rust").await;

    assert!(outline.is_fallback());
    assert_eq!(outline.into_inner().len(), FALLBACK_OUTLINE.len());
}

#[tokio::test]
async fn test_section_text_is_verbatim() {
    let body = "  Ownership is Rust's memory model.\nIt has three rules.  ";
    let mock = Arc::new(MockDriver::new_success(body));
    let writer = SectionWriter::new(mock.clone());

    let content = writer.generate_content("Ownership", "Rust").await;

    assert_eq!(content.into_inner(), body);
    assert_eq!(mock.prompts(), vec![section_prompt("Ownership", "Rust")]);
}

#[tokio::test]
async fn test_section_placeholder_on_error() {
    let writer = SectionWriter::new(Arc::new(MockDriver::new_error(
        GeminiErrorKind::MissingApiKey,
    )));

    let content = writer.generate_content("Ownership", "Rust").await;

    assert!(content.is_fallback());
    assert_eq!(content.value(), &section_placeholder("Ownership"));
}

#[tokio::test]
async fn test_pipeline_calls_oracle_once_per_section() -> anyhow::Result<()> {
    let mock = Arc::new(MockDriver::new_sequence(vec![
        MockResponse::Success("Intro, Body, Outro".to_string()),
        MockResponse::Success("About intro.".to_string()),
        MockResponse::Success("About body.".to_string()),
        MockResponse::Success("About outro.".to_string()),
    ]));
    let pipeline = PresentationPipeline::new(mock.clone());
    let request = GenerationRequest::new("My Talk", "Rust").validate()?;

    let draft = pipeline.generate(&request).await;

    assert_eq!(mock.call_count(), 4);
    assert_eq!(draft.title(), "My Talk");
    assert_eq!(draft.fallback_count(), 0);
    assert_eq!(
        draft.section_contents(),
        vec![
            SectionContent::new("Intro", "About intro."),
            SectionContent::new("Body", "About body."),
            SectionContent::new("Outro", "About outro."),
        ]
    );
    assert_eq!(mock.prompts()[2], section_prompt("Body", "Rust"));
    Ok(())
}

#[tokio::test]
async fn test_pipeline_isolates_section_failure() -> anyhow::Result<()> {
    let mock = Arc::new(MockDriver::new_sequence(vec![
        MockResponse::Success("Intro, Body, Outro".to_string()),
        MockResponse::Success("About intro.".to_string()),
        MockResponse::Error(GeminiErrorKind::HttpError {
            status_code: 429,
            message: "quota exceeded".to_string(),
        }),
        MockResponse::Success("About outro.".to_string()),
    ]));
    let pipeline = PresentationPipeline::new(mock);
    let request = GenerationRequest::new("My Talk", "Rust").validate()?;

    let draft = pipeline.generate(&request).await;

    let flags: Vec<bool> = draft.sections().iter().map(|s| s.is_fallback()).collect();
    assert_eq!(flags, vec![false, true, false]);
    assert_eq!(draft.sections()[1].value().body, section_placeholder("Body"));
    assert_eq!(draft.sections()[2].value().body, "About outro.");
    Ok(())
}

#[tokio::test]
async fn test_pipeline_with_unreachable_oracle() -> anyhow::Result<()> {
    let mock = Arc::new(MockDriver::new_error(GeminiErrorKind::ApiRequest(
        "dns error".to_string(),
    )));
    let pipeline = PresentationPipeline::new(mock.clone());
    let request = GenerationRequest::new("My Talk", "Rust").validate()?;

    let draft = pipeline.generate(&request).await;

    assert!(draft.outline().is_fallback());
    assert_eq!(draft.sections().len(), 9);
    assert_eq!(draft.fallback_count(), 10);
    assert_eq!(mock.call_count(), 10);
    Ok(())
}

#[cfg(feature = "api")]
#[tokio::test]
async fn test_live_outline() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = deckhand_models::GeminiClient::from_env()?;
    let generator = OutlineGenerator::new(Arc::new(client));
    let outline = generator.generate_outline("The history of sailing").await;
    assert!(!outline.is_fallback());
    Ok(())
}
