use board_types::models::Message;

use crate::models::MessageRow;
use crate::{Database, MessageStore, migrations};

impl MessageStore for Database {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(self.pool()).await?;
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        migrations::run(self.pool()).await
    }

    async fn list_messages(&self) -> Result<Vec<Message>, sqlx::Error> {
        let rows: Vec<MessageRow> = sqlx::query_as(
            "SELECT id, content, created_at FROM messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn insert_message(&self, content: &str) -> Result<Message, sqlx::Error> {
        let row: MessageRow = sqlx::query_as(
            "INSERT INTO messages (content) VALUES ($1) RETURNING id, content, created_at",
        )
        .bind(content)
        .fetch_one(self.pool())
        .await?;

        Ok(row.into())
    }
}
