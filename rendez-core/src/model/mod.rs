mod peer;
mod room;
mod signaling;

pub use peer::UserId;
pub use room::RoomId;
pub use signaling::{ClientMessage, ServerMessage};
