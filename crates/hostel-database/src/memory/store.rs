//! In-memory implementation of every repository trait using `DashMap`.
//!
//! Single-entry mutations hold the shard lock for the entry, which gives
//! `occupy` and `release` the same compare-and-set semantics as the
//! conditional `UPDATE` statements in PostgreSQL. State is lost on restart.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use hostel_core::AppError;
use hostel_core::result::AppResult;
use hostel_entity::{CreateTransaction, Room, RoomStatus, Student, Transaction};

use crate::traits::{RoomRepository, StudentRepository, TransactionRepository};

/// Process-local store for students, rooms and the ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    students: Arc<DashMap<String, Student>>,
    rooms: Arc<DashMap<String, Room>>,
    transactions: Arc<DashMap<Uuid, Transaction>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_rooms(rooms: impl Iterator<Item = Room>) -> Vec<Room> {
    let mut rooms: Vec<Room> = rooms.collect();
    rooms.sort_by(|a, b| a.room.cmp(&b.room));
    rooms
}

fn newest_first(mut txs: Vec<Transaction>) -> Vec<Transaction> {
    txs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    txs
}

#[async_trait]
impl RoomRepository for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Room>> {
        Ok(sorted_rooms(self.rooms.iter().map(|r| r.value().clone())))
    }

    async fn find_by_room(&self, room: &str) -> AppResult<Option<Room>> {
        Ok(self.rooms.get(room).map(|r| r.value().clone()))
    }

    async fn find_by_student(&self, sid: &str) -> AppResult<Option<Room>> {
        let held = sorted_rooms(
            self.rooms
                .iter()
                .filter(|r| r.is_held_by(sid))
                .map(|r| r.value().clone()),
        );
        Ok(held.into_iter().next())
    }

    async fn find_occupied(&self) -> AppResult<Vec<Room>> {
        Ok(sorted_rooms(
            self.rooms
                .iter()
                .filter(|r| r.is_occupied())
                .map(|r| r.value().clone()),
        ))
    }

    async fn create(&self, room: &str) -> AppResult<Room> {
        match self.rooms.entry(room.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!("Room '{room}' already exists"))),
            Entry::Vacant(slot) => Ok(slot.insert(Room::available(room)).value().clone()),
        }
    }

    async fn occupy(&self, room: &str, sid: &str) -> AppResult<bool> {
        match self.rooms.get_mut(room) {
            Some(mut entry) if !entry.is_occupied() => {
                entry.status = RoomStatus::Occupied;
                entry.assigned_sid = Some(sid.to_string());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn release(&self, room: &str) -> AppResult<bool> {
        match self.rooms.get_mut(room) {
            Some(mut entry) if entry.is_occupied() => {
                entry.status = RoomStatus::Available;
                entry.assigned_sid = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl StudentRepository for MemoryStore {
    async fn find_by_sid(&self, sid: &str) -> AppResult<Option<Student>> {
        Ok(self.students.get(sid).map(|s| s.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Student>> {
        let mut students: Vec<Student> = self.students.iter().map(|s| s.value().clone()).collect();
        students.sort_by(|a, b| a.sid.cmp(&b.sid));
        Ok(students)
    }

    async fn create(&self, student: Student) -> AppResult<Student> {
        match self.students.entry(student.sid.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Student '{}' already exists",
                student.sid
            ))),
            Entry::Vacant(slot) => Ok(slot.insert(student).value().clone()),
        }
    }
}

#[async_trait]
impl TransactionRepository for MemoryStore {
    async fn append(&self, data: CreateTransaction) -> AppResult<Transaction> {
        let tx = data.into_transaction();
        self.transactions.insert(tx.id, tx.clone());
        Ok(tx)
    }

    async fn find_all(&self) -> AppResult<Vec<Transaction>> {
        Ok(newest_first(
            self.transactions.iter().map(|t| t.value().clone()).collect(),
        ))
    }

    async fn find_by_student(&self, sid: &str) -> AppResult<Vec<Transaction>> {
        Ok(newest_first(
            self.transactions
                .iter()
                .filter(|t| t.sid == sid)
                .map(|t| t.value().clone())
                .collect(),
        ))
    }
}
