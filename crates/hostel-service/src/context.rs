//! Request context carrying the caller's identity and pending selection.

use serde::{Deserialize, Serialize};

use hostel_auth::SessionClaims;
use hostel_core::error::AppError;
use hostel_entity::Role;

/// Context for the current authenticated request.
///
/// Built from the session cookie by the API layer and passed into service
/// methods so every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Student id or admin username.
    pub subject: String,
    /// Role of the session.
    pub role: Role,
    /// Room selected but not yet paid for.
    pub pending_room: Option<String>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(subject: impl Into<String>, role: Role, pending_room: Option<String>) -> Self {
        Self {
            subject: subject.into(),
            role,
            pending_room,
        }
    }

    /// Shorthand for a student context with no pending room.
    pub fn student(sid: impl Into<String>) -> Self {
        Self::new(sid, Role::Student, None)
    }

    /// Shorthand for an admin context.
    pub fn admin(username: impl Into<String>) -> Self {
        Self::new(username, Role::Admin, None)
    }

    /// Returns whether the caller is the administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Fail unless the caller is a student.
    pub fn require_student(&self) -> Result<&str, AppError> {
        match self.role {
            Role::Student => Ok(&self.subject),
            Role::Admin => Err(AppError::authorization("Not logged in")),
        }
    }

    /// Fail unless the caller is the administrator.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization("Not authorized"))
        }
    }
}

impl From<&SessionClaims> for RequestContext {
    fn from(claims: &SessionClaims) -> Self {
        Self::new(claims.sub.clone(), claims.role, claims.pending_room.clone())
    }
}
