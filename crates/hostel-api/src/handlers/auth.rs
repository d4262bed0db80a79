//! Student login and logout.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum_extra::extract::CookieJar;

use hostel_entity::Role;

use crate::dto::request::LoginForm;
use crate::error::PlainError;
use crate::extractors::LenientForm;
use crate::state::AppState;
use crate::views;

/// GET /
pub async fn login_page() -> Html<String> {
    views::login::login_page()
}

/// POST /
///
/// Bad credentials answer 401 with the plain text `Invalid Login`.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    LenientForm(form): LenientForm<LoginForm>,
) -> Result<(CookieJar, Redirect), PlainError> {
    let student = state
        .student_auth
        .authenticate(form.sid.trim(), &form.pwd)
        .await?;

    let jar = state.start_session(jar, &student.sid, Role::Student, None)?;
    Ok((jar, Redirect::to("/rooms")))
}

/// GET /logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    (state.end_session(jar), Redirect::to("/"))
}
