use axum::extract::ws::Message;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rendez_core::{RoomId, UserId};
use tokio::sync::mpsc;
use tracing::info;

/// Handle to one connection's writer task. Sends are fire-and-forget.
pub type PeerTx = mpsc::UnboundedSender<Message>;

/// A (user, transport) pair registered in a room.
#[derive(Clone)]
pub struct Occupant {
    pub user_id: UserId,
    pub tx: PeerTx,
}

const ROOM_CAPACITY: usize = 2;

#[derive(Default)]
struct Room {
    occupants: Vec<Occupant>,
}

/// In-memory directory of active rooms: the sole owner of room state.
///
/// Rooms are created lazily on first join and removed the moment they become
/// empty. Each operation is atomic through the map's per-key entry locking,
/// so the capacity invariant holds under concurrent join/leave.
#[derive(Default)]
pub struct RoomDirectory {
    rooms: DashMap<RoomId, Room>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits an occupant, creating the room on first join. Returns `false`
    /// without mutation when the room already holds two occupants.
    ///
    /// A duplicate `user_id` is admitted silently; identifiers are a caller
    /// contract, not enforced here.
    pub fn add_occupant(&self, room_id: &RoomId, user_id: UserId, tx: PeerTx) -> bool {
        let mut room = match self.rooms.entry(room_id.clone()) {
            Entry::Occupied(entry) => entry.into_ref(),
            Entry::Vacant(entry) => {
                info!("Creating new room: {room_id}");
                entry.insert(Room::default())
            }
        };

        if room.occupants.len() >= ROOM_CAPACITY {
            return false;
        }

        room.occupants.push(Occupant { user_id, tx });
        true
    }

    /// Removes every occupant whose id equals `user_id`. Deletes the room
    /// once empty and returns `None`; otherwise returns the first occupant
    /// left behind. A no-op returning `None` for an absent room.
    pub fn remove_occupant(&self, room_id: &RoomId, user_id: &UserId) -> Option<Occupant> {
        match self.rooms.entry(room_id.clone()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().occupants.retain(|o| o.user_id != *user_id);

                if entry.get().occupants.is_empty() {
                    entry.remove();
                    return None;
                }

                entry.get().occupants.first().cloned()
            }
            Entry::Vacant(_) => None,
        }
    }

    /// The occupant in the room whose id differs from `user_id`.
    pub fn find_other(&self, room_id: &RoomId, user_id: &UserId) -> Option<Occupant> {
        let room = self.rooms.get(room_id)?;
        room.occupants
            .iter()
            .find(|o| o.user_id != *user_id)
            .cloned()
    }

    /// The occupant in the room whose id equals `user_id`.
    pub fn find_occupant(&self, room_id: &RoomId, user_id: &UserId) -> Option<Occupant> {
        let room = self.rooms.get(room_id)?;
        room.occupants
            .iter()
            .find(|o| o.user_id == *user_id)
            .cloned()
    }

    /// Number of registered occupants, 0 for an absent room.
    pub fn occupant_count(&self, room_id: &RoomId) -> usize {
        self.rooms.get(room_id).map_or(0, |r| r.occupants.len())
    }

    /// Whether the room currently exists in the directory.
    pub fn contains_room(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }
}
