//! Credential checks for the two login forms.

pub mod admin;
pub mod student;

pub use admin::AdminAuthenticator;
pub use student::StudentAuthenticator;
