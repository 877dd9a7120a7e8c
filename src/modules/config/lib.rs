//! Configuration loading for Jotter
//!
//! Settings come from one of two places: a YAML file (with `{{ env.NAME }}`
//! placeholders substituted) or the process environment. A `.env` file in
//! the working directory is loaded first in both cases. Callers apply their
//! overrides and then run [`ConfigValidator`] before starting the runtime.

pub mod env;
pub mod validator;
pub mod yaml;

pub use env::{settings_from_env, EnvSubstitutor};
pub use validator::ConfigValidator;
pub use yaml::YamlParser;

use jotter_core::{JotterError, Settings};

/// Read settings from `path` when given, otherwise from the environment
///
/// The result is not validated.
pub fn read(path: Option<&str>) -> Result<Settings, JotterError> {
    check_dotenv(dotenvy::dotenv())?;

    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                JotterError::Config(format!("Failed to read file '{}': {}", path, e))
            })?;
            YamlParser::parse(&content)
        }
        None => settings_from_env(),
    }
}

/// A missing `.env` file is fine; an unreadable or malformed one is not.
fn check_dotenv<T>(result: dotenvy::Result<T>) -> Result<(), JotterError> {
    match result {
        Err(e) if !e.not_found() => Err(JotterError::Config(format!(
            "Failed to load .env file: {}",
            e
        ))),
        _ => Ok(()),
    }
}
