//! Route definitions.
//!
//! HTML pages and JSON endpoints share one router. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(student_routes())
        .merge(admin_routes())
        .merge(health_routes())
        .fallback(handlers::fallback::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Login, room selection, payment, receipt and dashboard.
fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route("/logout", get(handlers::auth::logout))
        .route("/rooms", get(handlers::rooms::rooms_page))
        .route("/select_room", post(handlers::rooms::select_room))
        .route("/payment", get(handlers::payment::payment_page))
        .route("/mark_paid", post(handlers::payment::mark_paid))
        .route("/download_receipt", post(handlers::receipt::download_receipt))
        .route("/student/dashboard", get(handlers::student::dashboard))
}

/// Admin login, dashboard and revoke.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin",
            get(handlers::admin::login_page).post(handlers::admin::login),
        )
        .route("/admin/dashboard", get(handlers::admin::dashboard))
        .route("/admin/revoke_room", post(handlers::admin::revoke_room))
        .route("/admin/logout", get(handlers::admin::logout))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
