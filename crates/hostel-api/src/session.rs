//! Session cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};

use hostel_core::config::SessionConfig;

/// The cookie carrying a signed session token.
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .build()
}

/// A cookie matching the session cookie's name and path, for removal.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), "")).path("/").build()
}
