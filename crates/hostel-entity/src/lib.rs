//! # hostel-entity
//!
//! Domain entity models for the hostel allotment system. Every struct in
//! this crate represents a database table row or a domain value object.
//! Database entities additionally derive `sqlx::FromRow`.

pub mod role;
pub mod room;
pub mod student;
pub mod transaction;

pub use role::Role;
pub use room::{Room, RoomStatus};
pub use student::Student;
pub use transaction::{CreateTransaction, Transaction};
