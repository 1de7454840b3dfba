use rendez_core::ClientMessage;
use tracing::debug;

use crate::room::RoomDirectory;
use crate::signaling::send_to;

/// Best-effort pass-through of a negotiation envelope to the occupant it
/// names, payload untouched. An absent room or recipient drops the envelope
/// silently; the sender cannot tell "delivered" from "peer already gone".
///
/// The sender's claimed identity (`from`) is not checked against the
/// connection it arrived on.
pub fn forward(directory: &RoomDirectory, envelope: &ClientMessage) {
    let Some((room_id, to)) = envelope.route() else {
        // `join` never reaches the router
        return;
    };

    let Some(peer) = directory.find_occupant(room_id, to) else {
        debug!("Dropping undeliverable envelope for {to} in {room_id}");
        return;
    };

    send_to(&peer.tx, envelope);
}
