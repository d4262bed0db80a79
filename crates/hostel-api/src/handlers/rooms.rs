//! Room listing and selection.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use hostel_entity::Role;

use crate::dto::request::SelectRoomForm;
use crate::error::{ApiError, PlainError};
use crate::extractors::{CurrentSession, LenientForm};
use crate::state::AppState;
use crate::views;

/// GET /rooms
pub async fn rooms_page(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Result<Response, ApiError> {
    let Some(ctx) = session.student() else {
        return Ok(Redirect::to("/").into_response());
    };

    let rooms = state.allotment.list_rooms().await?;
    let assigned = state.allotment.assigned_room(&ctx.subject).await?;

    Ok(views::rooms::rooms_page(&ctx.subject, &rooms, assigned.as_ref()).into_response())
}

/// POST /select_room
///
/// Stores the choice in the session cookie only; failures are plain text.
pub async fn select_room(
    State(state): State<AppState>,
    session: CurrentSession,
    jar: CookieJar,
    LenientForm(form): LenientForm<SelectRoomForm>,
) -> Result<Response, PlainError> {
    let Some(ctx) = session.student() else {
        return Ok(Redirect::to("/").into_response());
    };

    let room = state
        .allotment
        .select_room(&ctx, form.room.as_deref())
        .await?;

    let jar = state.start_session(jar, &ctx.subject, Role::Student, Some(room))?;
    Ok((jar, Redirect::to("/payment")).into_response())
}
