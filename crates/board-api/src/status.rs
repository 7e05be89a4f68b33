use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
};
use chrono::{SecondsFormat, Utc};
use tracing::warn;

use board_db::MessageStore;
use board_types::api::{GreetingResponse, HealthResponse};

use crate::state::AppState;

/// GET /api/health: always 200; the body says whether the database answered.
pub async fn health_check<S: MessageStore>(State(state): State<AppState<S>>) -> Json<HealthResponse> {
    match state.store.ping().await {
        Ok(()) => Json(HealthResponse::connected()),
        Err(e) => {
            warn!("Health check failed: {}", e);
            Json(HealthResponse::disconnected(e.to_string()))
        }
    }
}

/// GET /api: greeting that echoes the caller's `Origin`.
pub async fn greeting(headers: HeaderMap) -> Json<GreetingResponse> {
    let client = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    Json(GreetingResponse {
        message: "Hello from Backend with Database!".into(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        client,
        success: true,
    })
}
