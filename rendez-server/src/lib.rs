pub mod config;
pub mod ice;
pub mod room;
pub mod signaling;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

pub use config::Config;
pub use ice::{IceServerProvider, TwilioProvider, ice_handler};
pub use room::{Occupant, PeerTx, RoomDirectory, forward, handle_disconnect, handle_join};
pub use signaling::{send_to, ws_handler};

/// Shared state handed to every HTTP and WebSocket handler.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RoomDirectory>,
    pub ice: Arc<dyn IceServerProvider>,
}

/// Builds the full HTTP surface: the signaling socket, the relay-credential
/// endpoint, and a permissive CORS layer for browser callers. Unknown paths
/// fall through to a 404.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/ice", get(ice_handler))
        .layer(cors)
        .with_state(state)
}
