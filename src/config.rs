use std::fmt;
use std::time::Duration;

use crate::notify::DEFAULT_WEBHOOK_URL;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub cookie_secure: bool,
    pub webhook_url: String,
    pub webhook_timeout: Duration,
    pub db_max_connections: u32,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{key} must be set"),
            ConfigError::Invalid { key, value } => write!(f, "{key} has an invalid value: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let session_key = get("SESSION_KEY");
        let webhook_url = get("WEBHOOK_URL").unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());

        let cookie_secure = match get("COOKIE_SECURE").as_deref() {
            None => false,
            Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") => false,
            Some(other) => {
                return Err(ConfigError::Invalid { key: "COOKIE_SECURE", value: other.to_string() });
            }
        };

        let webhook_timeout = match get("WEBHOOK_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
            Some(v) => v
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid { key: "WEBHOOK_TIMEOUT_SECS", value: v })?,
        };

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            None => DEFAULT_DB_MAX_CONNECTIONS,
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: v }),
            },
        };

        Ok(Self {
            database_url,
            bind_addr,
            session_key,
            cookie_secure,
            webhook_url,
            webhook_timeout,
            db_max_connections,
        })
    }
}
