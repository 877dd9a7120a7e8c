//! Configuration validation

use jotter_core::{JotterError, Settings};
use jotter_types::StoreKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for valid service names (lower-kebab-case or lower_snake_case)
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(?:[-_][a-z0-9]+)*$").unwrap());

/// Highest accepted log level (ERROR)
const MAX_LOG_LEVEL: u8 = 3;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate the entire configuration
    pub fn validate(&self, settings: &Settings) -> Result<(), JotterError> {
        self.validate_name(&settings.name)?;
        self.validate_database(settings)?;
        self.validate_server(settings)?;
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<(), JotterError> {
        if name.is_empty() {
            return Err(JotterError::Validation(
                "Service name cannot be empty".to_string(),
            ));
        }

        if !NAME_PATTERN.is_match(name) {
            return Err(JotterError::Validation(format!(
                "Invalid service name '{}': must be lower-kebab-case or lower_snake_case",
                name
            )));
        }

        Ok(())
    }

    fn validate_database(&self, settings: &Settings) -> Result<(), JotterError> {
        let database = &settings.database;

        // No URL is fine: the store falls back to the PG* environment
        if let (StoreKind::Postgres, Some(url)) = (database.store, database.url.as_deref()) {
            let url = url.trim();
            if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                return Err(JotterError::Validation(
                    "Database URL must start with postgres:// or postgresql://".to_string(),
                ));
            }
        }

        if let Some(pool) = &database.pool {
            if pool.max_connections() == 0 {
                return Err(JotterError::Validation(
                    "Pool max_connections must be greater than zero".to_string(),
                ));
            }
            if pool.min_connections() > pool.max_connections() {
                return Err(JotterError::Validation(format!(
                    "Pool min_connections ({}) exceeds max_connections ({})",
                    pool.min_connections(),
                    pool.max_connections()
                )));
            }
        }

        Ok(())
    }

    fn validate_server(&self, settings: &Settings) -> Result<(), JotterError> {
        let Some(server) = &settings.server else {
            return Ok(());
        };

        if let Some(port) = &server.port {
            port.trim().parse::<u16>().map_err(|_| {
                JotterError::Validation(format!("Invalid port '{}': expected 0-65535", port))
            })?;
        }

        if let Some(level) = server.log_level {
            if level > MAX_LOG_LEVEL {
                return Err(JotterError::Validation(format!(
                    "Invalid log_level {}: expected 0 (DEBUG) to 3 (ERROR)",
                    level
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jotter_core::{DatabaseConfig, PoolConfig, ServerConfig};

    fn postgres_settings() -> Settings {
        Settings::new(DatabaseConfig::postgres("postgres://localhost/todos"))
    }

    #[test]
    fn test_valid_settings() {
        let validator = ConfigValidator::new();
        assert!(validator.validate(&postgres_settings()).is_ok());
        assert!(validator
            .validate(&Settings::new(DatabaseConfig::memory()))
            .is_ok());
    }

    #[test]
    fn test_missing_url_is_allowed() {
        let validator = ConfigValidator::new();
        let settings = Settings::new(DatabaseConfig::default());
        assert!(validator.validate(&settings).is_ok());
    }

    #[test]
    fn test_bad_url_scheme() {
        let validator = ConfigValidator::new();
        let settings = Settings::new(DatabaseConfig::postgres("mysql://localhost/todos"));
        assert!(validator.validate(&settings).is_err());
    }

    #[test]
    fn test_invalid_name() {
        let mut settings = postgres_settings();
        settings.name = "Todo API".to_string();
        assert!(ConfigValidator::new().validate(&settings).is_err());

        settings.name = String::new();
        assert!(ConfigValidator::new().validate(&settings).is_err());
    }

    #[test]
    fn test_invalid_port() {
        let mut settings = postgres_settings();
        settings.server = Some(ServerConfig {
            port: Some("70000".to_string()),
            log_level: None,
        });
        assert!(ConfigValidator::new().validate(&settings).is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut settings = postgres_settings();
        settings.server = Some(ServerConfig {
            port: None,
            log_level: Some(7),
        });
        assert!(ConfigValidator::new().validate(&settings).is_err());
    }

    #[test]
    fn test_pool_bounds() {
        let mut settings = postgres_settings();
        settings.database.pool = Some(PoolConfig {
            max_connections: Some(2),
            min_connections: Some(5),
            ..PoolConfig::default()
        });
        assert!(ConfigValidator::new().validate(&settings).is_err());

        settings.database.pool = Some(PoolConfig {
            max_connections: Some(0),
            ..PoolConfig::default()
        });
        assert!(ConfigValidator::new().validate(&settings).is_err());
    }
}
