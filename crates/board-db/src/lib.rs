pub mod migrations;
pub mod models;
pub mod queries;
pub mod retry;
pub mod startup;

#[cfg(test)]
mod test_support;

use std::fmt;
use std::future::Future;
use std::time::Duration;

use board_types::models::Message;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;

pub use retry::RetryPolicy;
pub use startup::{StartupError, initialize};

/// Storage operations the HTTP layer and the startup sequence depend on.
///
/// [`Database`] is the PostgreSQL implementation; tests swap in in-memory
/// or failing stores.
pub trait MessageStore: Send + Sync + 'static {
    /// Trivial liveness query.
    fn ping(&self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// Create the `messages` table and its index if absent.
    fn ensure_schema(&self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// All messages, newest first (`created_at DESC, id DESC`).
    fn list_messages(&self) -> impl Future<Output = Result<Vec<Message>, sqlx::Error>> + Send;

    /// Insert already-trimmed content and return the stored row.
    fn insert_message(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<Message, sqlx::Error>> + Send;
}

/// Connection settings for the PostgreSQL pool.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "database".into(),
            port: 5432,
            user: "postgres".into(),
            password: "password".into(),
            database: "messages_db".into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

// Password stays out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

/// Shared handle to the pooled PostgreSQL connection. Cloning is cheap.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Build the pool without connecting. The first real connection is made
    /// by whichever query runs first, normally the startup retrier's ping.
    pub fn connect_lazy(config: &DbConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(options);

        info!(
            "Database pool configured for {}:{}/{} (max {} connections)",
            config.host, config.port, config.database, config.max_connections
        );
        Self { pool }
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Wait for checked-out connections to return, then close them.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let config = DbConfig {
            password: "hunter2".into(),
            ..DbConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("messages_db"));
    }

    #[test]
    fn defaults_match_compose_deployment() {
        let config = DbConfig::default();
        assert_eq!(config.host, "database");
        assert_eq!(config.port, 5432);
        assert_eq!(config.user, "postgres");
        assert_eq!(config.database, "messages_db");
    }
}
