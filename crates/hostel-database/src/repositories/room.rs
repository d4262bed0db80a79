//! Room repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_entity::Room;

use crate::traits::RoomRepository;

/// Room directory stored in the `rooms` table.
#[derive(Debug, Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn find_all(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>("SELECT room, status, assigned_sid FROM rooms ORDER BY room")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))
    }

    async fn find_by_room(&self, room: &str) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT room, status, assigned_sid FROM rooms WHERE room = $1")
            .bind(room)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    async fn find_by_student(&self, sid: &str) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT room, status, assigned_sid FROM rooms \
             WHERE assigned_sid = $1 AND status = 'occupied' \
             ORDER BY room LIMIT 1",
        )
        .bind(sid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find room by student", e)
        })
    }

    async fn find_occupied(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT room, status, assigned_sid FROM rooms WHERE status = 'occupied' ORDER BY room",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list occupied rooms", e))
    }

    async fn create(&self, room: &str) -> AppResult<Room> {
        let created = sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (room) VALUES ($1) \
             ON CONFLICT (room) DO NOTHING \
             RETURNING room, status, assigned_sid",
        )
        .bind(room)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create room", e))?;

        created.ok_or_else(|| AppError::conflict(format!("Room '{room}' already exists")))
    }

    async fn occupy(&self, room: &str, sid: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE rooms SET status = 'occupied', assigned_sid = $2 \
             WHERE room = $1 AND status <> 'occupied'",
        )
        .bind(room)
        .bind(sid)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to occupy room", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn release(&self, room: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE rooms SET status = 'available', assigned_sid = NULL \
             WHERE room = $1 AND status = 'occupied'",
        )
        .bind(room)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to release room", e))?;

        Ok(result.rows_affected() > 0)
    }
}
