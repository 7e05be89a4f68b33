use serde::{Deserialize, Serialize};

use crate::models::Message;

// -- Messages --

/// Body of `POST /api/messages`. Unknown fields are ignored; `content` is
/// optional here so a missing field reaches validation instead of failing
/// deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMessageRequest {
    pub content: Option<String>,
}

impl CreateMessageRequest {
    /// Trimmed content, or `None` when absent or blank.
    pub fn trimmed_content(&self) -> Option<&str> {
        self.content
            .as_deref()
            .map(|c| c.trim_matches(is_trimmable))
            .filter(|c| !c.is_empty())
    }
}

/// Whitespace stripped from message edges: Unicode `White_Space` minus
/// U+0085 (NEL), plus U+FEFF (BOM), matching ECMAScript `String.prototype.trim`.
pub fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageCreatedResponse {
    pub message: String,
    #[serde(rename = "newMessage")]
    pub new_message: Message,
    pub success: bool,
}

// -- Health --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub database: DatabaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub success: bool,
}

impl HealthResponse {
    pub fn connected() -> Self {
        Self {
            database: DatabaseStatus::Connected,
            error: None,
            success: true,
        }
    }

    pub fn disconnected(error: impl Into<String>) -> Self {
        Self {
            database: DatabaseStatus::Disconnected,
            error: Some(error.into()),
            success: false,
        }
    }
}

// -- Greeting --

#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
    /// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
    pub timestamp: String,
    pub client: String,
    pub success: bool,
}

// -- Errors --

/// Every failed request carries this body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: false,
        }
    }
}
