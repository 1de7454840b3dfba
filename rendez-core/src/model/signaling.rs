use crate::model::peer::UserId;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelopes arriving from a client over the socket.
///
/// `sdp` and `candidate` are opaque negotiation payloads produced by the
/// browser; the relay never inspects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    #[serde(rename_all = "camelCase")]
    Join { room_id: RoomId, user_id: UserId },

    #[serde(rename_all = "camelCase")]
    Offer {
        room_id: RoomId,
        from: UserId,
        to: UserId,
        sdp: Value,
    },

    #[serde(rename_all = "camelCase")]
    Answer {
        room_id: RoomId,
        from: UserId,
        to: UserId,
        sdp: Value,
    },

    #[serde(rename = "ice-candidate", rename_all = "camelCase")]
    IceCandidate {
        room_id: RoomId,
        from: UserId,
        to: UserId,
        candidate: Value,
    },
}

impl ClientMessage {
    /// Routing coordinates of a forwardable envelope, `None` for `join`.
    pub fn route(&self) -> Option<(&RoomId, &UserId)> {
        match self {
            ClientMessage::Join { .. } => None,
            ClientMessage::Offer { room_id, to, .. }
            | ClientMessage::Answer { room_id, to, .. }
            | ClientMessage::IceCandidate { room_id, to, .. } => Some((room_id, to)),
        }
    }
}

/// Envelopes the relay originates. Forwarded `offer`/`answer`/`ice-candidate`
/// traffic is passed through as-is and never re-wrapped in this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    RoomFull,

    WaitingForPeer,

    #[serde(rename_all = "camelCase")]
    PeerJoined { other_user_id: UserId },

    #[serde(rename_all = "camelCase")]
    PeerDisconnected { user_id: UserId },
}
