//! # hostel-auth
//!
//! Authentication for the hostel allotment system.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing
//! - `session`: signed session tokens carried in a cookie
//! - `credentials`: student and administrator credential checks

pub mod credentials;
pub mod password;
pub mod session;

pub use credentials::{AdminAuthenticator, StudentAuthenticator};
pub use password::PasswordHasher;
pub use session::{SessionClaims, SessionCodec};
