//! Student credential check against stored records.

use std::sync::Arc;

use tracing::{info, warn};

use hostel_core::error::AppError;
use hostel_core::result::AppResult;
use hostel_database::StudentRepository;
use hostel_entity::Student;

use crate::password::PasswordHasher;

/// Verifies a student id and password against the `students` store.
#[derive(Debug, Clone)]
pub struct StudentAuthenticator {
    students: Arc<dyn StudentRepository>,
    hasher: PasswordHasher,
}

impl StudentAuthenticator {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self {
            students,
            hasher: PasswordHasher::new(),
        }
    }

    /// Returns the student on success, an authentication error otherwise.
    pub async fn authenticate(&self, sid: &str, password: &str) -> AppResult<Student> {
        if sid.is_empty() || password.is_empty() {
            return Err(AppError::authentication("Invalid Login"));
        }

        let Some(student) = self.students.find_by_sid(sid).await? else {
            warn!(sid = %sid, "Login attempt for unknown student");
            return Err(AppError::authentication("Invalid Login"));
        };

        if !self.hasher.verify_password(password, &student.password_hash)? {
            warn!(sid = %sid, "Student login failed: wrong password");
            return Err(AppError::authentication("Invalid Login"));
        }

        info!(sid = %sid, "Student logged in");
        Ok(student)
    }
}
