//! Request handlers grouped by area.

pub mod admin;
pub mod auth;
pub mod fallback;
pub mod health;
pub mod payment;
pub mod receipt;
pub mod rooms;
pub mod student;
