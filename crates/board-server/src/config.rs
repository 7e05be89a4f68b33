use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use board_db::{DbConfig, RetryPolicy};

/// Process configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db: DbConfig,
    pub retry: RetryPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset, empty or whitespace-only variables fall back to defaults; set
    /// but unparseable ones are an error naming the variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = DbConfig::default();
        let retry_defaults = RetryPolicy::default();

        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let db = DbConfig {
            host: string("DB_HOST", &defaults.host),
            port: parse(&lookup, "DB_PORT", defaults.port)?,
            user: string("DB_USER", &defaults.user),
            password: string("DB_PASSWORD", &defaults.password),
            database: string("DB_NAME", &defaults.database),
            max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout: Duration::from_millis(parse(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_MS",
                defaults.acquire_timeout.as_millis() as u64,
            )?),
        };

        let retry = RetryPolicy {
            attempts: parse(&lookup, "DB_CONNECT_RETRIES", retry_defaults.attempts)?,
            delay: Duration::from_millis(parse(
                &lookup,
                "DB_RETRY_DELAY_MS",
                retry_defaults.delay.as_millis() as u64,
            )?),
        };

        Ok(Self {
            host: string("HOST", "0.0.0.0"),
            port: parse(&lookup, "PORT", 3000)?,
            db,
            retry,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.db.host, "database");
        assert_eq!(config.db.user, "postgres");
        assert_eq!(config.db.password, "password");
        assert_eq!(config.db.database, "messages_db");
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config.addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("PORT", "8081"),
            ("DB_HOST", "localhost"),
            ("DB_PORT", "15432"),
            ("DB_NAME", "board"),
            ("DB_CONNECT_RETRIES", "10"),
            ("DB_RETRY_DELAY_MS", "500"),
        ])
        .unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.port, 15432);
        assert_eq!(config.db.database, "board");
        assert_eq!(config.retry.attempts, 10);
        assert_eq!(config.retry.delay, Duration::from_millis(500));
    }

    #[test]
    fn empty_values_use_defaults() {
        let config = config(&[
            ("PORT", ""),
            ("DB_PORT", "  "),
            ("DB_HOST", ""),
            ("DB_RETRY_DELAY_MS", "\t"),
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.host, "database");
        assert_eq!(config.retry.delay, RetryPolicy::default().delay);
    }

    #[test]
    fn bad_number_names_variable() {
        let err = config(&[("DB_PORT", "fivefour")]).unwrap_err();
        assert!(err.to_string().contains("DB_PORT"));
    }
}
