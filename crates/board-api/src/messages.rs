use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{info, warn};

use board_db::MessageStore;
use board_types::api::{CreateMessageRequest, MessageCreatedResponse, MessagesResponse};

use crate::error::{ADD_FAILED, ApiError, CONTENT_REQUIRED, FETCH_FAILED};
use crate::state::AppState;

/// GET /api/messages: every message, newest first.
pub async fn list_messages<S: MessageStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let messages = state
        .store
        .list_messages()
        .await
        .map_err(|e| ApiError::storage(FETCH_FAILED, e))?;

    Ok(Json(MessagesResponse {
        messages,
        success: true,
    }))
}

/// POST /api/messages: store trimmed, non-blank `content`.
///
/// A body that fails to parse (wrong content type, malformed JSON, non-string
/// `content`) is treated the same as a missing `content`.
pub async fn create_message<S: MessageStore>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<Json<MessageCreatedResponse>, ApiError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!("Rejected message body: {}", rejection.body_text());
            return Err(ApiError::Validation(CONTENT_REQUIRED));
        }
    };

    let content = req
        .trimmed_content()
        .ok_or(ApiError::Validation(CONTENT_REQUIRED))?;

    let new_message = state
        .store
        .insert_message(content)
        .await
        .map_err(|e| ApiError::storage(ADD_FAILED, e))?;

    info!("Message {} added", new_message.id);

    Ok(Json(MessageCreatedResponse {
        message: "Message added successfully".into(),
        new_message,
        success: true,
    }))
}
