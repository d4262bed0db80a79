//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hostel_core::error::{AppError, ErrorKind};

/// JSON error body: `{"ok": false, "error": ..., "code": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub ok: bool,
    pub error: String,
    pub code: String,
}

/// HTTP status for each error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication | ErrorKind::Authorization => StatusCode::UNAUTHORIZED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Io => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Client-facing message; server-side details stay in the log.
fn public_message(err: &AppError) -> String {
    if err.kind.is_server_error() {
        tracing::error!(kind = %err.kind, error = %err.message, source = ?err.source, "Internal server error");
        "Internal server error".to_string()
    } else {
        err.message.clone()
    }
}

/// Error returned by JSON endpoints.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.kind);
        let body = ApiErrorResponse {
            ok: false,
            error: public_message(&self.0),
            code: self.0.kind.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Error returned as `text/plain` by form routes.
#[derive(Debug)]
pub struct PlainError(pub AppError);

impl From<AppError> for PlainError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PlainError {
    fn into_response(self) -> Response {
        (status_for(self.0.kind), public_message(&self.0)).into_response()
    }
}
