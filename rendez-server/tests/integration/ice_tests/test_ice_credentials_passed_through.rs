use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use rendez_server::{AppState, RoomDirectory, ice_handler};

use crate::integration::init_tracing;
use crate::utils::MockIceProvider;

fn state_with(ice: MockIceProvider) -> AppState {
    AppState {
        directory: Arc::new(RoomDirectory::new()),
        ice: Arc::new(ice),
    }
}

#[tokio::test]
async fn test_ice_credentials_passed_through() {
    init_tracing();

    let servers = vec![
        json!({
            "urls": "turn:global.turn.example.com:3478?transport=udp",
            "username": "0123456789abcdef",
            "credential": "s3cr3t",
        }),
        json!({"urls": "stun:global.stun.example.com:3478"}),
    ];
    let state = state_with(MockIceProvider::with_servers(servers.clone()));

    let response = ice_handler(State(state)).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed, Value::Array(servers));
}

#[tokio::test]
async fn test_provider_failure_is_server_error() {
    init_tracing();

    let state = state_with(MockIceProvider::failing());

    let response = ice_handler(State(state)).await.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
