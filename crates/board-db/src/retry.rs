use std::time::Duration;

use tracing::{info, warn};

use crate::MessageStore;
use crate::startup::StartupError;

/// Bounded retry at a fixed delay. No backoff growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            delay: Duration::from_millis(2000),
        }
    }
}

/// Ping the store until it answers or the policy runs out.
///
/// Sleeps `policy.delay` between failed attempts, never after the last one.
/// An `attempts` of zero still makes a single attempt.
pub async fn connect_with_retry<S: MessageStore>(
    store: &S,
    policy: &RetryPolicy,
) -> Result<(), StartupError> {
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match store.ping().await {
            Ok(()) => {
                info!("Database connected successfully (attempt {}/{})", attempt, attempts);
                return Ok(());
            }
            Err(e) => {
                warn!("Database connection attempt {} failed: {}", attempt, e);

                if attempt >= attempts {
                    return Err(StartupError::ConnectionExhausted { attempts, source: e });
                }

                info!("Retrying in {}ms...", policy.delay.as_millis());
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}
