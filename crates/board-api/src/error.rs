//! Request-level failures.
//!
//! Handlers return `Result<_, ApiError>`; the error renders as
//! `{error, success: false}` with a matching status. Storage causes are
//! logged here and never echoed to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use board_types::api::ErrorResponse;

pub const CONTENT_REQUIRED: &str = "Message content is required";
pub const FETCH_FAILED: &str = "Failed to fetch messages";
pub const ADD_FAILED: &str = "Failed to add message";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller sent unusable input.
    #[error("{0}")]
    Validation(&'static str),

    /// A query failed. `message` is what the caller sees.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn storage(message: &'static str, source: sqlx::Error) -> Self {
        Self::Storage { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage { message, source } = &self {
            error!("{}: {}", message, source);
        }
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
