//! Listener and Postgres pool settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Port used when neither `PORT` nor the config file sets one
pub const DEFAULT_PORT: u16 = 80;

/// sqlx pool limits for the Postgres todo store
///
/// Each field may be left out of the config file; the accessors supply the
/// value the store actually builds its pool with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Concurrent store round trips allowed before requests queue (10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,

    /// Connections kept open while idle (0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_connections: Option<u32>,

    /// Seconds a request waits for a connection before failing with 500 (30)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquire_timeout_secs: Option<u64>,

    /// Seconds before an unused connection is closed (600)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout_secs: Option<u64>,

    /// Seconds before any connection is recycled (1800)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lifetime_secs: Option<u64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: Some(10),
            min_connections: Some(0),
            acquire_timeout_secs: Some(30),
            idle_timeout_secs: Some(600),
            max_lifetime_secs: Some(1800),
        }
    }
}

impl PoolConfig {
    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(10)
    }

    pub fn min_connections(&self) -> u32 {
        self.min_connections.unwrap_or(0)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs.unwrap_or(30))
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs.unwrap_or(600))
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs.unwrap_or(1800))
    }
}

/// `server:` section of the config file, also fed by `PORT` and `JOTTER_LOG_LEVEL`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen port as written; validated as a `u16` before startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// Log level: 0=DEBUG, 1=INFO, 2=WARN, 3=ERROR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<u8>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: Some(DEFAULT_PORT.to_string()),
            log_level: Some(1),
        }
    }
}
