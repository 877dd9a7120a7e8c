//! Store connection configuration

use jotter_types::StoreKind;
use serde::{Deserialize, Serialize};

use super::PoolConfig;

/// Which store to use and how to reach it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store backend
    #[serde(default)]
    pub store: StoreKind,

    /// Connection URL (supports environment variable substitution)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Connection pool configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolConfig>,
}

impl DatabaseConfig {
    /// Postgres store reached through `url`
    pub fn postgres(url: impl Into<String>) -> Self {
        Self {
            store: StoreKind::Postgres,
            url: Some(url.into()),
            pool: None,
        }
    }

    /// Process-local store
    pub fn memory() -> Self {
        Self {
            store: StoreKind::Memory,
            url: None,
            pool: None,
        }
    }

    /// Pool settings, falling back to defaults
    pub fn pool(&self) -> PoolConfig {
        self.pool.clone().unwrap_or_default()
    }
}
