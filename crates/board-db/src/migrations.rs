use sqlx::PgPool;
use tracing::info;

/// Create-if-absent only; safe to run on every start.
pub const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS messages (
        id          BIGSERIAL PRIMARY KEY,
        content     TEXT NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE INDEX IF NOT EXISTS idx_messages_created_at
        ON messages(created_at DESC, id DESC);
";

pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;

    info!("Database migrations complete");
    Ok(())
}
