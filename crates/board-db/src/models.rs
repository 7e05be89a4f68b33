//! Database row types. These map directly to PostgreSQL rows and stay
//! distinct from the API models in board-types.

use board_types::models::Message;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MessageRow {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            created_at: row.created_at,
        }
    }
}
