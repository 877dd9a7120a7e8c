//! Todo stores
//!
//! The HTTP handlers only ever see `Arc<dyn TodoStore>`. PostgreSQL is the
//! production backend; the in-memory store backs local runs and tests.

mod memory;
mod postgres;
mod traits;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use traits::TodoStore;

use jotter_core::{DatabaseConfig, JotterError};
use jotter_types::StoreKind;
use std::sync::Arc;
use tracing::warn;

/// Create the store described by `config`
///
/// Never touches the network: a Postgres pool opens connections on first
/// use, so an unreachable database does not stop the process from starting.
/// Without a URL the pool falls back to the `PG*` environment variables and
/// libpq defaults.
pub fn create_store(config: &DatabaseConfig) -> Result<Arc<dyn TodoStore>, JotterError> {
    match config.store {
        StoreKind::Postgres => {
            let store = match config.url.as_deref() {
                Some(url) => PostgresStore::with_config(url, &config.pool())?,
                None => {
                    warn!("DATABASE_URL is not set; connecting with PG* environment defaults");
                    PostgresStore::from_pg_env(&config.pool())
                }
            };
            Ok(Arc::new(store))
        }
        StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}
