//! Domain models for Jotter configuration

mod database;
mod settings;
mod types;

pub use database::DatabaseConfig;
pub use settings::Settings;
pub use types::{PoolConfig, ServerConfig};
