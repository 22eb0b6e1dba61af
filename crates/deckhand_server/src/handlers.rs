//! Route handlers.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use deckhand_core::{GenerationRequest, REQUIRED_FIELDS_MESSAGE};
use deckhand_error::{HttpError, ValidationError};
use deckhand_pptx::PPTX_MIME;
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::{ApiError, AppState};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Landing page with the generation form.
pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Generate a deck and return it as an attachment.
///
/// The body is read raw so that malformed JSON gets the same 400 as a
/// missing field.
#[instrument(skip_all, fields(bytes = body.len()))]
pub(crate) async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    debug!(stage = "received", "Generate request received");

    debug!(stage = "validating", "Validating request");
    let request: GenerationRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Request body is not a valid generation request");
        ValidationError::new(REQUIRED_FIELDS_MESSAGE)
    })?;
    let request = request.validate()?;

    let deck = state.build_deck(&request).await?;

    debug!(stage = "responding", "Sending deck");
    let disposition = content_disposition(deck.filename())?;
    info!(
        title = request.title(),
        slides = deck.draft().sections().len() + 3,
        bytes = deck.bytes().len(),
        filename = %deck.filename(),
        "Presentation generated"
    );

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(PPTX_MIME)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        deck.into_bytes(),
    )
        .into_response())
}

/// `Content-Disposition` value offering `filename` as a download.
///
/// ASCII names are sent as-is. Other names get an ASCII fallback plus an
/// RFC 5987 `filename*` parameter.
///
/// # Examples
///
/// ```
/// use deckhand_server::content_disposition;
///
/// let value = content_disposition("My_Talk_Presentation.pptx").unwrap();
/// assert_eq!(value, r#"attachment; filename="My_Talk_Presentation.pptx""#);
///
/// let value = content_disposition("Café_Presentation.pptx").unwrap();
/// assert_eq!(
///     value,
///     r#"attachment; filename="Caf__Presentation.pptx"; filename*=UTF-8''Caf%C3%A9_Presentation.pptx"#
/// );
/// ```
pub fn content_disposition(filename: &str) -> Result<HeaderValue, HttpError> {
    let value = if filename.is_ascii() {
        format!(r#"attachment; filename="{filename}""#)
    } else {
        let fallback: String = filename
            .chars()
            .map(|c| if c.is_ascii() { c } else { '_' })
            .collect();
        format!(
            r#"attachment; filename="{fallback}"; filename*=UTF-8''{}"#,
            urlencoding::encode(filename)
        )
    };
    HeaderValue::from_str(&value).map_err(|e| HttpError::new(e.to_string()))
}
