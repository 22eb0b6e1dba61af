use deckhand_core::{
    GenerateRequest, GenerateResponse, Generated, GenerationRequest, Output,
    REQUIRED_FIELDS_MESSAGE, SectionContent,
};

#[test]
fn validate_trims_both_fields() {
    let request = GenerationRequest::new("  Quarterly Review ", "\tcloud costs\n");
    let valid = request.validate().unwrap();
    assert_eq!(valid.title(), "Quarterly Review");
    assert_eq!(valid.topic(), "cloud costs");
}

#[test]
fn validate_rejects_missing_title() {
    let request: GenerationRequest = serde_json::from_str(r#"{"topic": "Rust"}"#).unwrap();
    let err = request.validate().unwrap_err();
    assert_eq!(err.message, REQUIRED_FIELDS_MESSAGE);
}

#[test]
fn validate_rejects_blank_topic() {
    let request = GenerationRequest::new("My Talk", "   ");
    assert!(request.validate().is_err());
}

#[test]
fn empty_json_object_deserializes() {
    let request: GenerationRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(request, GenerationRequest::default());
    assert!(request.validate().is_err());
}

#[test]
fn generated_map_keeps_provenance() {
    let fallback = Generated::fallback("Intro", "offline").map(str::len);
    assert!(fallback.is_fallback());
    assert_eq!(*fallback.value(), 5);

    let oracle = Generated::Oracle(SectionContent::new("Intro", "Hello"));
    assert_eq!(oracle.reason(), None);
    assert_eq!(oracle.into_inner().body, "Hello");
}

#[test]
fn generated_serializes_with_source_tag() -> anyhow::Result<()> {
    let value = Generated::fallback("text".to_string(), "offline");
    let json = serde_json::to_value(&value)?;
    assert_eq!(json["source"], "fallback");
    assert_eq!(json["data"]["reason"], "offline");
    Ok(())
}

#[test]
fn response_text_concatenates_outputs() {
    let response = GenerateResponse {
        outputs: vec![
            Output::Text("Intro, ".to_string()),
            Output::Text("Outro".to_string()),
        ],
    };
    assert_eq!(response.text(), "Intro, Outro");
}

#[test]
fn builder_sets_optional_fields() -> anyhow::Result<()> {
    let request = GenerateRequest::builder()
        .messages(vec![deckhand_core::Message::user("Hi")])
        .max_tokens(Some(64))
        .build()?;
    assert_eq!(*request.max_tokens(), Some(64));
    assert_eq!(*request.model(), None);
    Ok(())
}
