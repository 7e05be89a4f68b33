use thiserror::Error;
use tracing::{error, info};

use crate::MessageStore;
use crate::retry::{RetryPolicy, connect_with_retry};

/// Failures that stop the process before it starts listening.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("unable to connect to database after {attempts} attempts")]
    ConnectionExhausted {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    #[error("database schema initialization failed")]
    Schema(#[source] sqlx::Error),
}

/// Startup sequence: wait for the database, then make sure the schema
/// exists. The caller only starts serving once this returns `Ok`.
pub async fn initialize<S: MessageStore>(
    store: &S,
    policy: &RetryPolicy,
) -> Result<(), StartupError> {
    connect_with_retry(store, policy).await?;

    store.ensure_schema().await.map_err(|e| {
        error!("Database initialization error: {}", e);
        StartupError::Schema(e)
    })?;

    info!("Database initialized successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedStore;
    use std::time::Duration;

    fn quick() -> RetryPolicy {
        RetryPolicy {
            attempts: 3,
            delay: Duration::from_millis(100),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn connects_then_creates_schema() {
        let store = ScriptedStore::new(&[false, true], false);

        initialize(&store, &quick()).await.unwrap();

        assert_eq!(store.calls(), vec!["ping", "ping", "ensure_schema"]);
    }

    #[tokio::test(start_paused = true)]
    async fn schema_skipped_when_connection_exhausted() {
        let store = ScriptedStore::new(&[], false);

        let err = initialize(&store, &quick()).await.unwrap_err();

        assert!(matches!(err, StartupError::ConnectionExhausted { attempts: 3, .. }));
        assert!(!store.calls().contains(&"ensure_schema"));
    }

    #[tokio::test(start_paused = true)]
    async fn schema_failure_is_fatal() {
        let store = ScriptedStore::new(&[], true).with_failing_schema();

        let err = initialize(&store, &quick()).await.unwrap_err();

        assert!(matches!(err, StartupError::Schema(_)));
        assert_eq!(store.calls(), vec!["ping", "ensure_schema"]);
    }

    #[tokio::test(start_paused = true)]
    async fn running_twice_is_harmless() {
        let store = ScriptedStore::new(&[], true);

        initialize(&store, &quick()).await.unwrap();
        initialize(&store, &quick()).await.unwrap();

        assert_eq!(store.calls(), vec!["ping", "ensure_schema", "ping", "ensure_schema"]);
    }
}
