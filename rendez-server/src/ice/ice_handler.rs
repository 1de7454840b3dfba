use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::error;

use crate::AppState;

/// `GET /ice` — fetch relay credentials for the caller.
///
/// Provider failures surface as a bare 500; the upstream error never leaks
/// to the client.
pub async fn ice_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.ice.fetch_ice_servers().await {
        Ok(servers) => Json(servers).into_response(),
        Err(e) => {
            error!("Failed to fetch ICE servers: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
