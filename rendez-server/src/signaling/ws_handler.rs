use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use rendez_core::{ClientMessage, RoomId, UserId};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::AppState;
use crate::room::{forward, handle_disconnect, handle_join};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// One session per transport connection.
///
/// A writer task drains an unbounded channel into the socket; the sender half
/// of that channel is what rooms hold as the connection's transport handle.
/// Inbound frames are decoded and dispatched to completion in arrival order.
async fn handle_socket(socket: WebSocket, state: AppState) {
    info!("New client connected");

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    // last-known identity, set on the first join attempt
    let mut current_room: Option<RoomId> = None;
    let mut current_user: Option<UserId> = None;

    while let Some(frame) = receiver.next().await {
        let msg = match frame {
            Ok(msg) => msg,
            Err(e) => {
                error!("WebSocket error: {e}");
                break;
            }
        };

        match msg {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(ClientMessage::Join { room_id, user_id }) => {
                    current_room = Some(room_id.clone());
                    current_user = Some(user_id.clone());
                    handle_join(&state.directory, &room_id, &user_id, &tx);
                }
                Ok(envelope) => forward(&state.directory, &envelope),
                Err(e) => warn!("Invalid message format: {e}"),
            },
            Message::Close(_) => break,
            _ => {}
        }
    }

    info!("Client disconnected");
    if let (Some(room_id), Some(user_id)) = (current_room, current_user) {
        handle_disconnect(&state.directory, &room_id, &user_id);
    }

    send_task.abort();
}
