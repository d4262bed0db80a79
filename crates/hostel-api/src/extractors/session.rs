//! `CurrentSession` extractor: decodes the session cookie, if any.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use tracing::debug;

use hostel_auth::SessionClaims;
use hostel_core::error::AppError;
use hostel_service::RequestContext;

use crate::state::AppState;

/// The caller's session. Never rejects: a missing, expired or tampered
/// cookie yields an anonymous session so HTML routes can redirect while
/// JSON routes answer 401.
#[derive(Debug, Clone, Default)]
pub struct CurrentSession(pub Option<SessionClaims>);

impl CurrentSession {
    /// Context for a student session.
    pub fn student(&self) -> Option<RequestContext> {
        self.0
            .as_ref()
            .filter(|c| c.is_student())
            .map(RequestContext::from)
    }

    /// Context for an admin session.
    pub fn admin(&self) -> Option<RequestContext> {
        self.0
            .as_ref()
            .filter(|c| c.is_admin())
            .map(RequestContext::from)
    }

    /// Student context or a 401-mapped error.
    pub fn require_student(&self) -> Result<RequestContext, AppError> {
        self.student()
            .ok_or_else(|| AppError::authorization("Not logged in"))
    }

    /// Admin context or a 401-mapped error.
    pub fn require_admin(&self) -> Result<RequestContext, AppError> {
        self.admin()
            .ok_or_else(|| AppError::authorization("Not authorized"))
    }
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let claims = jar
            .get(&state.config.session.cookie_name)
            .and_then(|cookie| match state.sessions.decode(cookie.value()) {
                Ok(claims) => Some(claims),
                Err(e) => {
                    debug!(error = %e.message, "Ignoring session cookie");
                    None
                }
            });

        Ok(Self(claims))
    }
}
