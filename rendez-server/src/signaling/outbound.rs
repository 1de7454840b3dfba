use axum::extract::ws::Message;
use serde::Serialize;
use tracing::error;

use crate::room::PeerTx;

/// Serialize an envelope and hand it to a connection's writer task.
/// Fire-and-forget: a failed send means the writer is already gone, and the
/// envelope is lost with it.
pub fn send_to<T: Serialize>(tx: &PeerTx, msg: &T) {
    match serde_json::to_string(msg) {
        Ok(json) => {
            if tx.send(Message::Text(json.into())).is_err() {
                error!("Attempted to send to a disconnected peer");
            }
        }
        Err(e) => error!("Failed to serialize outbound envelope: {e}"),
    }
}
