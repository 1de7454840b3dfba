use anyhow::{Context, Result, bail};
use axum::extract::ws::Message;
use rendez_core::{ServerMessage, UserId};
use serde_json::Value;
use std::time::Duration;
use tokio::sync::mpsc;

use rendez_server::PeerTx;

/// Timeout for receiving an expected envelope (ms).
pub const RECV_TIMEOUT_MS: u64 = 1000;

/// A fake connection endpoint: the sender half is what rooms register as the
/// transport handle, the receiver half captures everything the relay pushes
/// to the connection.
pub struct TestPeer {
    pub user_id: UserId,
    pub tx: PeerTx,
    rx: mpsc::UnboundedReceiver<Message>,
}

impl TestPeer {
    pub fn new(user_id: &str) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            user_id: UserId::from(user_id),
            tx,
            rx,
        }
    }

    /// Next outbound frame, decoded as raw JSON.
    pub async fn recv_json(&mut self) -> Result<Value> {
        let msg = tokio::time::timeout(Duration::from_millis(RECV_TIMEOUT_MS), self.rx.recv())
            .await
            .context("timed out waiting for an envelope")?
            .context("connection channel closed")?;

        match msg {
            Message::Text(text) => {
                serde_json::from_str(text.as_str()).context("invalid JSON frame")
            }
            other => bail!("unexpected frame: {other:?}"),
        }
    }

    /// Next outbound frame, decoded as a server-originated envelope.
    pub async fn recv_server_message(&mut self) -> Result<ServerMessage> {
        let json = self.recv_json().await?;
        serde_json::from_value(json).context("not a server envelope")
    }

    /// Asserts that nothing is pending on this connection.
    pub fn assert_idle(&mut self) {
        match self.rx.try_recv() {
            Err(mpsc::error::TryRecvError::Empty) => {}
            other => panic!("expected no pending envelope, got {other:?}"),
        }
    }
}
