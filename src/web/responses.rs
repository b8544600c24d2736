use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Canonical JSON payload for API error responses.
#[derive(Debug, Serialize, Clone)]
pub struct ApiMessage {
    pub error: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

pub fn json_error(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ApiMessage>) {
    (status, Json(ApiMessage::new(message)))
}

/// Plain-text 500 reply carrying a generic, route-specific message.
///
/// The underlying error is logged at the call site; only the message reaches the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageError {
    message: &'static str,
}

impl PageError {
    pub fn internal(message: &'static str) -> Self {
        Self { message }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.message).into_response()
    }
}

/// Plain-text validation reply. Validation failures are reported with a 200.
pub fn notice(message: &'static str) -> Response {
    (StatusCode::OK, message).into_response()
}
