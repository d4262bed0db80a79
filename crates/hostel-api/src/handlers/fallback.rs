//! Unknown-path handler.

use axum::Json;
use axum::http::{StatusCode, Uri};
use tracing::warn;

use crate::dto::response::NotFoundResponse;

/// Any unrouted path.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    warn!(path = %uri.path(), "No route");
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Not found".to_string(),
            path: uri.path().to_string(),
        }),
    )
}
