//! Room directory entities.

pub mod model;
pub mod status;

pub use model::Room;
pub use status::RoomStatus;
