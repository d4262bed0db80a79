//! Room entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::RoomStatus;

/// A hostel room and its current occupant.
///
/// `assigned_sid` is present exactly when `status` is
/// [`RoomStatus::Occupied`]; the database enforces the same rule with a
/// CHECK constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Room identifier, e.g. `"101"`.
    pub room: String,
    /// Occupancy status.
    pub status: RoomStatus,
    /// Student holding the room.
    pub assigned_sid: Option<String>,
}

impl Room {
    /// A newly seeded, unassigned room.
    pub fn available(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            status: RoomStatus::Available,
            assigned_sid: None,
        }
    }

    /// Check if the room is occupied.
    pub fn is_occupied(&self) -> bool {
        self.status == RoomStatus::Occupied
    }

    /// Check if the room is assigned to the given student.
    pub fn is_held_by(&self, sid: &str) -> bool {
        self.is_occupied() && self.assigned_sid.as_deref() == Some(sid)
    }

    /// Check the occupancy invariant.
    pub fn is_consistent(&self) -> bool {
        self.is_occupied() == self.assigned_sid.is_some()
    }
}
