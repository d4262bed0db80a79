//! PostgreSQL repository implementations.

pub mod room;
pub mod student;
pub mod transaction;

pub use room::PgRoomRepository;
pub use student::PgStudentRepository;
pub use transaction::PgTransactionRepository;
