//! Payment page and confirmation.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::dto::request::{MarkPaidRequest, validate_request};
use crate::dto::response::OkResponse;
use crate::error::ApiError;
use crate::extractors::{CurrentSession, LenientJson};
use crate::state::AppState;
use crate::views;

/// GET /payment
pub async fn payment_page(session: CurrentSession) -> Response {
    match session.student() {
        Some(ctx) => match ctx.pending_room.as_deref() {
            Some(room) => views::payment::payment_page(&ctx.subject, room).into_response(),
            None => Redirect::to("/").into_response(),
        },
        None => Redirect::to("/").into_response(),
    }
}

/// POST /mark_paid
///
/// Body: `{"room": "...", "txHash": "..."}`.
pub async fn mark_paid(
    State(state): State<AppState>,
    session: CurrentSession,
    LenientJson(req): LenientJson<MarkPaidRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let ctx = session.require_student()?;
    validate_request(&req)?;

    state
        .allotment
        .confirm_payment(&ctx, &req.room, &req.tx_hash)
        .await?;

    Ok(Json(OkResponse::new()))
}
