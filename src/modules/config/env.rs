//! Environment variable handling
//!
//! Two jobs live here: substituting `{{ env.NAME }}` placeholders inside a
//! YAML configuration file, and building [`Settings`] straight from the
//! process environment when no file is given.

use jotter_core::{DatabaseConfig, JotterError, PoolConfig, ServerConfig, Settings};
use jotter_types::StoreKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

/// Store connection string
pub const DATABASE_URL: &str = "DATABASE_URL";
/// Listen port
pub const PORT: &str = "PORT";
/// Store backend (`postgres` or `memory`)
pub const STORE: &str = "JOTTER_STORE";
/// Log level, 0=DEBUG through 3=ERROR
pub const LOG_LEVEL: &str = "JOTTER_LOG_LEVEL";
pub const DB_MAX_CONNECTIONS: &str = "JOTTER_DB_MAX_CONNECTIONS";
pub const DB_MIN_CONNECTIONS: &str = "JOTTER_DB_MIN_CONNECTIONS";

/// Regex pattern for environment variable placeholders: {{ env.VAR_NAME }}
static ENV_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap()
});

/// Environment variable substitutor; every referenced variable must be set
pub struct EnvSubstitutor;

impl EnvSubstitutor {
    pub fn new() -> Self {
        Self
    }

    /// Substitute environment variables in the given content
    pub fn substitute(&self, content: &str) -> Result<String, JotterError> {
        self.substitute_with(content, |name| std::env::var(name).ok())
    }

    /// Substitute placeholders using `lookup` to resolve variable names
    pub fn substitute_with<F>(&self, content: &str, lookup: F) -> Result<String, JotterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<String> = Vec::new();

        let result = ENV_PATTERN.replace_all(content, |cap: &regex::Captures<'_>| {
            match lookup(&cap[1]) {
                Some(value) => value,
                None => {
                    missing.push(cap[1].to_string());
                    cap[0].to_string()
                }
            }
        });

        if !missing.is_empty() {
            missing.dedup();
            return Err(JotterError::EnvVarNotFound(missing.join(", ")));
        }

        Ok(result.into_owned())
    }
}

impl Default for EnvSubstitutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Build settings from the process environment
pub fn settings_from_env() -> Result<Settings, JotterError> {
    settings_from_lookup(|name| std::env::var(name).ok())
}

/// Build settings from an arbitrary variable source
///
/// Unset or empty variables fall back to defaults; present but unparsable
/// values are configuration errors.
pub fn settings_from_lookup<F>(lookup: F) -> Result<Settings, JotterError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let store = match get(STORE) {
        Some(raw) => StoreKind::from_str(raw.trim()).map_err(JotterError::Config)?,
        None => StoreKind::default(),
    };

    let max_connections = parse_var::<u32>(DB_MAX_CONNECTIONS, get(DB_MAX_CONNECTIONS))?;
    let min_connections = parse_var::<u32>(DB_MIN_CONNECTIONS, get(DB_MIN_CONNECTIONS))?;
    let pool = if max_connections.is_some() || min_connections.is_some() {
        Some(PoolConfig {
            max_connections,
            min_connections,
            ..PoolConfig::default()
        })
    } else {
        None
    };

    let port = get(PORT).map(|p| p.trim().to_string());
    let log_level = parse_var::<u8>(LOG_LEVEL, get(LOG_LEVEL))?;
    let server = if port.is_some() || log_level.is_some() {
        Some(ServerConfig { port, log_level })
    } else {
        None
    };

    Ok(Settings {
        database: DatabaseConfig {
            store,
            url: get(DATABASE_URL),
            pool,
        },
        server,
        ..Settings::default()
    })
}

fn parse_var<T: FromStr>(name: &str, value: Option<String>) -> Result<Option<T>, JotterError> {
    value
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| JotterError::Config(format!("Invalid value for {}: '{}'", name, raw)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_placeholder_spacing() {
        let substitutor = EnvSubstitutor::new();
        let vars = lookup(&[("PORT", "3000")]);
        assert_eq!(substitutor.substitute_with("{{env.PORT}}", &vars).unwrap(), "3000");
        assert_eq!(substitutor.substitute_with("{{  env.PORT  }}", &vars).unwrap(), "3000");
        assert_eq!(
            substitutor.substitute_with("{{ inputs.id }}", &vars).unwrap(),
            "{{ inputs.id }}"
        );
    }

    #[test]
    fn test_substitute_with_lookup() {
        let substitutor = EnvSubstitutor::new();
        let result = substitutor
            .substitute_with(
                "url: {{ env.DATABASE_URL }}",
                lookup(&[("DATABASE_URL", "postgres://localhost/todos")]),
            )
            .unwrap();
        assert_eq!(result, "url: postgres://localhost/todos");
    }

    #[test]
    fn test_substitute_with_process_env() {
        std::env::set_var("JOTTER_TEST_SUBSTITUTE_VAR", "test_value");
        let substitutor = EnvSubstitutor::new();
        let result = substitutor
            .substitute("value: {{ env.JOTTER_TEST_SUBSTITUTE_VAR }}")
            .unwrap();
        assert_eq!(result, "value: test_value");
        std::env::remove_var("JOTTER_TEST_SUBSTITUTE_VAR");
    }

    #[test]
    fn test_substitute_missing_var_strict() {
        let substitutor = EnvSubstitutor::new();
        let result = substitutor.substitute_with("{{ env.NONEXISTENT }}", lookup(&[]));
        match result {
            Err(JotterError::EnvVarNotFound(names)) => assert_eq!(names, "NONEXISTENT"),
            other => panic!("expected EnvVarNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_from_empty_env() {
        let settings = settings_from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.database.store, StoreKind::Postgres);
        assert!(settings.database.url.is_none());
        assert!(settings.database.pool.is_none());
        assert_eq!(settings.port(), 80);
    }

    #[test]
    fn test_settings_from_env_vars() {
        let settings = settings_from_lookup(lookup(&[
            (DATABASE_URL, "postgres://localhost/todos"),
            (PORT, "3000"),
            (LOG_LEVEL, "0"),
            (DB_MAX_CONNECTIONS, "4"),
        ]))
        .unwrap();
        assert_eq!(
            settings.database.url.as_deref(),
            Some("postgres://localhost/todos")
        );
        assert_eq!(settings.port(), 3000);
        assert_eq!(settings.log_level(), 0);
        assert_eq!(settings.database.pool().max_connections(), 4);
        assert_eq!(settings.database.pool().min_connections(), 0);
    }

    #[test]
    fn test_settings_from_env_memory_store() {
        let settings = settings_from_lookup(lookup(&[(STORE, "memory")])).unwrap();
        assert_eq!(settings.database.store, StoreKind::Memory);
    }

    #[test]
    fn test_settings_from_env_invalid_values() {
        assert!(settings_from_lookup(lookup(&[(STORE, "sqlite")])).is_err());
        assert!(settings_from_lookup(lookup(&[(DB_MAX_CONNECTIONS, "many")])).is_err());
        assert!(settings_from_lookup(lookup(&[(LOG_LEVEL, "loud")])).is_err());
    }

    #[test]
    fn test_settings_from_env_ignores_blank_values() {
        let settings = settings_from_lookup(lookup(&[(DATABASE_URL, "  "), (PORT, "")])).unwrap();
        assert!(settings.database.url.is_none());
        assert!(settings.server.is_none());
    }
}
