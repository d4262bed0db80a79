//! Student dashboard.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::error::ApiError;
use crate::extractors::CurrentSession;
use crate::state::AppState;
use crate::views;

/// GET /student/dashboard
///
/// Students without a room are sent to the room list.
pub async fn dashboard(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Result<Response, ApiError> {
    let Some(ctx) = session.student() else {
        return Ok(Redirect::to("/").into_response());
    };

    let overview = state.ledger.student_overview(&ctx).await?;
    let Some(room) = overview.room.as_ref() else {
        return Ok(Redirect::to("/rooms").into_response());
    };

    Ok(views::student::dashboard_page(&overview, &room.room).into_response())
}
