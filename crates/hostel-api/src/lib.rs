//! # hostel-api
//!
//! HTTP layer for the hostel allotment system built on Axum.
//!
//! Serves the HTML pages, the JSON mutation endpoints and the receipt
//! download, carries the session in a signed cookie, and maps `AppError`
//! kinds onto HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;
pub mod views;

pub use router::build_router;
pub use state::AppState;
