//! Root service settings

use serde::{Deserialize, Serialize};

use super::types::DEFAULT_PORT;
use super::{DatabaseConfig, ServerConfig};

/// Root configuration for a Jotter process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Service name, used in log lines
    #[serde(default = "default_name")]
    pub name: String,

    /// Store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Server configuration (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

fn default_name() -> String {
    "jotter".to_string()
}

impl Settings {
    /// Create settings with the given store and no server section
    pub fn new(database: DatabaseConfig) -> Self {
        Self {
            name: default_name(),
            database,
            server: None,
        }
    }

    /// Get the server port, defaulting to 80
    pub fn port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port.as_ref())
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    /// Get the log level, defaulting to 1 (INFO)
    pub fn log_level(&self) -> u8 {
        self.server.as_ref().and_then(|s| s.log_level).unwrap_or(1)
    }

    /// Override the listen port, creating the server section if needed
    pub fn with_port(mut self, port: u16) -> Self {
        match self.server {
            Some(ref mut server) => server.port = Some(port.to_string()),
            None => {
                self.server = Some(ServerConfig {
                    port: Some(port.to_string()),
                    log_level: None,
                })
            }
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DatabaseConfig::default())
    }
}
