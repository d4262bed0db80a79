//! # hostel-database
//!
//! Storage for students, rooms and the payment ledger. Repository traits
//! are the seam; PostgreSQL and in-memory implementations sit behind them
//! and [`Repositories`] selects one from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod traits;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::Repositories;
pub use traits::{RoomRepository, StudentRepository, TransactionRepository};
