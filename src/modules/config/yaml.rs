//! YAML configuration parser

use jotter_core::{DatabaseConfig, JotterError, PoolConfig, ServerConfig, Settings};
use jotter_types::StoreKind;
use serde::Deserialize;

use crate::env::EnvSubstitutor;

/// YAML parser for Jotter configuration files
pub struct YamlParser;

/// On-disk schema. Every section is optional so a file can override just
/// the parts it cares about.
#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    database: Option<FileDatabase>,

    #[serde(default)]
    server: Option<FileServer>,
}

#[derive(Debug, Deserialize)]
struct FileDatabase {
    #[serde(default)]
    store: Option<StoreKind>,

    #[serde(default)]
    url: Option<String>,

    /// Alternate field name, matching the `DATABASE_URL` wording.
    #[serde(default)]
    connection_string: Option<String>,

    #[serde(default)]
    pool: Option<PoolConfig>,
}

#[derive(Debug, Deserialize)]
struct FileServer {
    /// Either `8080` or `"8080"`.
    #[serde(default)]
    port: Option<serde_yaml::Value>,

    #[serde(default)]
    log_level: Option<u8>,
}

impl YamlParser {
    /// Parse a YAML string into settings, substituting `{{ env.NAME }}` first
    pub fn parse(content: &str) -> Result<Settings, JotterError> {
        let substituted = EnvSubstitutor::new().substitute(content)?;
        Self::parse_raw(&substituted)
    }

    /// Parse a YAML string without environment variable substitution
    pub fn parse_raw(content: &str) -> Result<Settings, JotterError> {
        let file = serde_yaml::from_str::<FileConfig>(content)
            .map_err(|e| JotterError::Config(format!("YAML parse error: {}", e)))?;
        file_to_settings(file)
    }
}

fn file_to_settings(file: FileConfig) -> Result<Settings, JotterError> {
    let mut settings = Settings::default();

    if let Some(name) = file.name {
        settings.name = name;
    }

    if let Some(db) = file.database {
        settings.database = DatabaseConfig {
            store: db.store.unwrap_or_default(),
            url: db.url.or(db.connection_string),
            pool: db.pool,
        };
    }

    if let Some(server) = file.server {
        let port = server.port.map(port_to_string).transpose()?;
        settings.server = Some(ServerConfig {
            port,
            log_level: server.log_level,
        });
    }

    Ok(settings)
}

fn port_to_string(value: serde_yaml::Value) -> Result<String, JotterError> {
    match value {
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::String(s) => Ok(s),
        other => Err(JotterError::Config(format!(
            "server.port must be a number or string, got {:?}",
            other
        ))),
    }
}
