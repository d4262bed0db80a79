//! Receipt download.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use hostel_service::ReceiptData;

use crate::dto::request::DownloadReceiptRequest;
use crate::error::ApiError;
use crate::extractors::{CurrentSession, LenientJson};
use crate::state::AppState;

/// POST /download_receipt
///
/// Body: `{"room": "...", "txHash": "...", "dateUtc": "..."}`. The student
/// id comes from the session.
pub async fn download_receipt(
    State(state): State<AppState>,
    session: CurrentSession,
    LenientJson(req): LenientJson<DownloadReceiptRequest>,
) -> Result<Response, ApiError> {
    let ctx = session.require_student()?;

    let data = ReceiptData::new(
        &ctx.subject,
        req.room.as_deref(),
        req.tx_hash.as_deref(),
        req.date_utc.as_deref(),
    )?;
    let disposition = format!("attachment; filename=\"{}\"", data.file_name());
    let pdf = state.receipts.generate(data).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}
