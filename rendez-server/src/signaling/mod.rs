mod outbound;
mod ws_handler;

pub use outbound::*;
pub use ws_handler::*;
