//! Student repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_entity::Student;

use crate::traits::StudentRepository;

/// Student records stored in the `students` table.
#[derive(Debug, Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    /// Create a new student repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_by_sid(&self, sid: &str) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE sid = $1")
            .bind(sid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find student", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY sid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list students", e))
    }

    async fn create(&self, student: Student) -> AppResult<Student> {
        let created = sqlx::query_as::<_, Student>(
            "INSERT INTO students (sid, password_hash, created_at) VALUES ($1, $2, $3) \
             ON CONFLICT (sid) DO NOTHING RETURNING *",
        )
        .bind(&student.sid)
        .bind(&student.password_hash)
        .bind(student.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create student", e))?;

        created.ok_or_else(|| {
            AppError::conflict(format!("Student '{}' already exists", student.sid))
        })
    }
}
