//! Admin login, dashboard and revoke.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use hostel_core::error::ErrorKind;
use hostel_entity::Role;

use crate::dto::request::{AdminLoginForm, RevokeRoomRequest, validate_request};
use crate::dto::response::OkResponse;
use crate::error::ApiError;
use crate::extractors::{CurrentSession, LenientForm, LenientJson};
use crate::state::AppState;
use crate::views;

/// GET /admin
pub async fn login_page() -> Html<String> {
    views::admin::login_page(None)
}

/// POST /admin
///
/// Bad credentials re-render the login page with an error.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    LenientForm(form): LenientForm<AdminLoginForm>,
) -> Result<Response, ApiError> {
    match state.admin_auth.authenticate(&form.username, &form.password) {
        Ok(username) => {
            let jar = state.start_session(jar, &username, Role::Admin, None)?;
            Ok((jar, Redirect::to("/admin/dashboard")).into_response())
        }
        Err(e) if e.kind == ErrorKind::Authentication => Ok((
            StatusCode::UNAUTHORIZED,
            views::admin::login_page(Some(&e.message)),
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// GET /admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Result<Response, ApiError> {
    let Some(ctx) = session.admin() else {
        return Ok(Redirect::to("/admin").into_response());
    };

    let overview = state.ledger.admin_overview(&ctx).await?;
    Ok(views::admin::dashboard_page(&overview).into_response())
}

/// POST /admin/revoke_room
///
/// Body: `{"room": "..."}`.
pub async fn revoke_room(
    State(state): State<AppState>,
    session: CurrentSession,
    LenientJson(req): LenientJson<RevokeRoomRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let ctx = session.require_admin()?;
    validate_request(&req)?;

    state.allotment.revoke_room(&ctx, &req.room).await?;
    Ok(Json(OkResponse::new()))
}

/// GET /admin/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    (state.end_session(jar), Redirect::to("/admin"))
}
