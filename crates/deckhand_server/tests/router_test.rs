// Driving the router in-process with tower's oneshot.

use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use deckhand_core::{GenerateRequest, GenerateResponse, Output};
use deckhand_error::{DeckhandResult, GeminiError, GeminiErrorKind};
use deckhand_interface::DeckhandDriver;
use deckhand_layout::Theme;
use deckhand_pptx::PPTX_MIME;
use deckhand_server::{AppState, create_router};
use serde_json::Value;
use tower::ServiceExt;
use zip::ZipArchive;

/// Answers outline prompts with three sections and everything else with a
/// short paragraph, or fails every call.
struct ScriptedDriver {
    fail: bool,
    calls: AtomicUsize,
}

impl ScriptedDriver {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            fail,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeckhandDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> DeckhandResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GeminiError::new(GeminiErrorKind::ApiRequest("offline".to_string())).into());
        }
        let prompt = req.messages[0].content[0].as_text();
        let text = if prompt.starts_with("Generate 12-13") {
            "Intro, Body, Outro"
        } else {
            "A short paragraph."
        };
        Ok(GenerateResponse {
            outputs: vec![Output::Text(text.to_string())],
        })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

fn generate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn slide_count(bytes: &[u8]) -> anyhow::Result<usize> {
    let archive = ZipArchive::new(Cursor::new(bytes.to_vec()))?;
    Ok(archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .count())
}

async fn json_body(response: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_generate_returns_attachment() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new(false);
    let app = create_router(AppState::new(driver.clone(), Theme::default()));

    let response = app
        .oneshot(generate_request(r#"{"title": "My Talk", "topic": "Rust"}"#))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], PPTX_MIME);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        r#"attachment; filename="My_Talk_Presentation.pptx""#
    );
    // One outline call plus one per section.
    assert_eq!(driver.calls(), 4);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(&bytes[..2], b"PK");
    // welcome + outline + three sections + thank you
    assert_eq!(slide_count(&bytes)?, 6);
    Ok(())
}

#[tokio::test]
async fn test_non_ascii_title_gets_encoded_filename() -> anyhow::Result<()> {
    let app = create_router(AppState::new(ScriptedDriver::new(false), Theme::default()));

    let response = app
        .oneshot(generate_request(r#"{"title": "Café Talk", "topic": "Coffee"}"#))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        r#"attachment; filename="Caf__Talk_Presentation.pptx"; filename*=UTF-8''Caf%C3%A9_Talk_Presentation.pptx"#
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_field_is_bad_request_without_oracle_calls() -> anyhow::Result<()> {
    for body in [
        r#"{"topic": "Rust"}"#,
        r#"{"title": "My Talk", "topic": "   "}"#,
        r#"{}"#,
        "not json",
    ] {
        let driver = ScriptedDriver::new(false);
        let app = create_router(AppState::new(driver.clone(), Theme::default()));

        let response = app.oneshot(generate_request(body)).await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = json_body(response).await?;
        assert_eq!(json["error"], "Title and topic are required");
        assert_eq!(driver.calls(), 0);
    }
    Ok(())
}

#[tokio::test]
async fn test_unreachable_oracle_still_produces_deck() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new(true);
    let app = create_router(AppState::new(driver.clone(), Theme::default()));

    let response = app
        .oneshot(generate_request(r#"{"title": "Offline", "topic": "Rust"}"#))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    // Outline fallback has nine sections.
    assert_eq!(driver.calls(), 10);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(slide_count(&bytes)?, 12);
    Ok(())
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = create_router(AppState::new(ScriptedDriver::new(false), Theme::default()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await?["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_index_serves_form() -> anyhow::Result<()> {
    let app = create_router(AppState::new(ScriptedDriver::new(false), Theme::default()));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let html = String::from_utf8(bytes.to_vec())?;
    assert!(html.contains("/generate"));
    // Downloads prefer the UTF-8 filename over the ASCII fallback.
    let encoded = html.find("filename\\*=UTF-8''").expect("filename* parsing");
    let ascii = html.find("/filename=\"").expect("filename parsing");
    assert!(encoded < ascii);
    assert!(html.contains("decodeURIComponent"));
    Ok(())
}

#[tokio::test]
async fn test_build_deck_reports_draft() -> anyhow::Result<()> {
    let state = AppState::new(ScriptedDriver::new(false), Theme::default());
    let request = deckhand_core::GenerationRequest::new("My Talk", "Rust").validate()?;

    let deck = state.build_deck(&request).await?;

    assert_eq!(deck.filename(), "My_Talk_Presentation.pptx");
    assert_eq!(deck.draft().sections().len(), 3);
    assert!(!deck.draft().outline().is_fallback());
    Ok(())
}
