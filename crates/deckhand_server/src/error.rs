//! Mapping of pipeline errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use deckhand_error::DeckhandError;
use serde_json::json;
use tracing::{error, warn};

/// Error returned by handlers.
///
/// Validation failures become `400`, everything else `500`; the body is
/// `{"error": <message>}` without source locations.
#[derive(Debug)]
pub struct ApiError(DeckhandError);

impl ApiError {
    /// The wrapped error.
    pub fn inner(&self) -> &DeckhandError {
        &self.0
    }

    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<DeckhandError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(error = %self.0, "Request rejected");
        }
        (status, Json(json!({ "error": self.0.message() }))).into_response()
    }
}
