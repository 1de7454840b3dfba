use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rendez_server::{AppState, Config, RoomDirectory, TwilioProvider, app};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        directory: Arc::new(RoomDirectory::new()),
        ice: Arc::new(TwilioProvider::new(
            config.twilio_account_sid.clone(),
            config.twilio_auth_token.clone(),
        )),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Signaling server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
