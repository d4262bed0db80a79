//! Startup seed data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rooms and students inserted when the server starts.
///
/// Existing records are left alone, so the same seed can be applied on
/// every start. Mainly for the in-memory provider, whose state does not
/// outlive the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Room identifiers to create as available.
    #[serde(default)]
    pub rooms: Vec<String>,
    /// Students who may log in.
    #[serde(default)]
    pub students: Vec<SeedStudent>,
}

impl SeedConfig {
    /// Nothing to insert.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.students.is_empty()
    }
}

/// A seeded student. The password is hashed before it is stored.
#[derive(Clone, Serialize, Deserialize)]
pub struct SeedStudent {
    pub sid: String,
    pub password: String,
}

impl fmt::Debug for SeedStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedStudent")
            .field("sid", &self.sid)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let student = SeedStudent {
            sid: "S1".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{student:?}");
        assert!(printed.contains("S1"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(SeedConfig::default().is_empty());
    }
}
