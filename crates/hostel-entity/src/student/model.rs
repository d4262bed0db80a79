//! Student entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student allowed to log in and book a room.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Unique student identifier.
    pub sid: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the operator seeded the student.
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Build a student record stamped with the current time.
    pub fn new(sid: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            sid: sid.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}
