pub mod cors;
pub mod error;
pub mod messages;
pub mod state;
pub mod status;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use board_db::MessageStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Every route the board serves, with CORS and request tracing applied.
pub fn router<S: MessageStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/api", get(status::greeting))
        .route("/api/health", get(status::health_check::<S>))
        .route(
            "/api/messages",
            get(messages::list_messages::<S>).post(messages::create_message::<S>),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors::cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
