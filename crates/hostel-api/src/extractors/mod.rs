//! Custom Axum extractors.

pub mod form;
pub mod json;
pub mod session;

pub use form::LenientForm;
pub use json::LenientJson;
pub use session::CurrentSession;
