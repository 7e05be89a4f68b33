use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored board entry. Never mutated after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
