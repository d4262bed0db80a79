//! Session token claims.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hostel_entity::Role;

/// Claims carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the student id, or the admin username.
    pub sub: String,
    /// Role the session was issued for.
    pub role: Role,
    /// Room the student has selected but not yet paid for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_room: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token id, logged on issue.
    pub jti: Uuid,
}

impl SessionClaims {
    /// Check whether this is a student session.
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }

    /// Check whether this is an admin session.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
