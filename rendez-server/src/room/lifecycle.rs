use rendez_core::{RoomId, ServerMessage, UserId};
use tracing::{debug, info};

use crate::room::{PeerTx, RoomDirectory};
use crate::signaling::send_to;

/// Admission path for a `join` envelope.
///
/// A rejected joiner is told `room_full` and left outside any room with its
/// connection open. An admitted joiner either waits alone or is paired with
/// the occupant already present; pairing notifies both sides symmetrically,
/// and which side initiates the offer is entirely up to the clients.
pub fn handle_join(directory: &RoomDirectory, room_id: &RoomId, user_id: &UserId, tx: &PeerTx) {
    if !directory.add_occupant(room_id, user_id.clone(), tx.clone()) {
        info!("Room {room_id} is full, rejecting {user_id}");
        send_to(tx, &ServerMessage::RoomFull);
        return;
    }

    let Some(other) = directory.find_other(room_id, user_id) else {
        debug!("{user_id} is waiting for a peer in {room_id}");
        send_to(tx, &ServerMessage::WaitingForPeer);
        return;
    };

    info!("Paired {user_id} with {} in {room_id}", other.user_id);
    send_to(
        tx,
        &ServerMessage::PeerJoined {
            other_user_id: other.user_id.clone(),
        },
    );
    send_to(
        &other.tx,
        &ServerMessage::PeerJoined {
            other_user_id: user_id.clone(),
        },
    );
}

/// Departure path, driven by the gateway when a transport closes.
///
/// Idempotent: a second call against an already-vacated room is a no-op.
pub fn handle_disconnect(directory: &RoomDirectory, room_id: &RoomId, user_id: &UserId) {
    let Some(remaining) = directory.remove_occupant(room_id, user_id) else {
        return;
    };

    info!("{user_id} left {room_id}, notifying {}", remaining.user_id);
    send_to(
        &remaining.tx,
        &ServerMessage::PeerDisconnected {
            user_id: user_id.clone(),
        },
    );
}
