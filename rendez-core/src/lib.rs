pub mod model;

pub use model::{ClientMessage, RoomId, ServerMessage, UserId};
