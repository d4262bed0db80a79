//! Repository traits shared by every storage engine.

use std::fmt::Debug;

use async_trait::async_trait;

use hostel_core::result::AppResult;
use hostel_entity::{CreateTransaction, Room, Student, Transaction};

/// The room directory.
#[async_trait]
pub trait RoomRepository: Send + Sync + Debug + 'static {
    /// All rooms ordered by identifier.
    async fn find_all(&self) -> AppResult<Vec<Room>>;

    /// Look up a single room.
    async fn find_by_room(&self, room: &str) -> AppResult<Option<Room>>;

    /// The occupied room assigned to `sid`, if any.
    async fn find_by_student(&self, sid: &str) -> AppResult<Option<Room>>;

    /// Occupied rooms ordered by identifier.
    async fn find_occupied(&self) -> AppResult<Vec<Room>>;

    /// Seed an available room. Fails with a conflict if it already exists.
    async fn create(&self, room: &str) -> AppResult<Room>;

    /// Compare-and-set: mark `room` occupied by `sid` only if it is not
    /// already occupied. Returns `false` when nothing matched.
    async fn occupy(&self, room: &str, sid: &str) -> AppResult<bool>;

    /// Mark an occupied room available and clear its student. Returns
    /// `false` when the room is unknown or not occupied.
    async fn release(&self, room: &str) -> AppResult<bool>;
}

/// Student credential records.
#[async_trait]
pub trait StudentRepository: Send + Sync + Debug + 'static {
    /// Look up a student by identifier.
    async fn find_by_sid(&self, sid: &str) -> AppResult<Option<Student>>;

    /// All students ordered by identifier.
    async fn find_all(&self) -> AppResult<Vec<Student>>;

    /// Insert a student. Fails with a conflict if the id is taken.
    async fn create(&self, student: Student) -> AppResult<Student>;
}

/// The append-only payment ledger.
#[async_trait]
pub trait TransactionRepository: Send + Sync + Debug + 'static {
    /// Append a ledger entry.
    async fn append(&self, data: CreateTransaction) -> AppResult<Transaction>;

    /// All entries, newest first.
    async fn find_all(&self) -> AppResult<Vec<Transaction>>;

    /// Entries for one student, newest first.
    async fn find_by_student(&self, sid: &str) -> AppResult<Vec<Transaction>>;
}
