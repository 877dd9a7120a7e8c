//! PostgreSQL store implementation

use async_trait::async_trait;
use jotter_core::{JotterError, PoolConfig};
use jotter_types::{NewTodo, Todo, TodoContent};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;

use super::traits::TodoStore;

/// Table layout the statements below expect
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id      SERIAL PRIMARY KEY,
    title   TEXT,
    summary TEXT
)
"#;

// Path ids are bound as text and cast server-side, so a non-numeric id is
// rejected by PostgreSQL itself rather than matched against nothing.
const INSERT_TODO: &str = "INSERT INTO todos (title, summary) VALUES ($1, $2) RETURNING id::bigint";
const SELECT_TODO: &str = "SELECT title, summary FROM todos WHERE id = $1::bigint";
const SELECT_TODOS: &str = "SELECT id::bigint AS id, title, summary FROM todos";
const DELETE_TODO: &str =
    "DELETE FROM todos WHERE id = $1::bigint RETURNING id::bigint AS id, title, summary";

type TodoRow = (i64, Option<String>, Option<String>);

/// PostgreSQL todo store
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with default pool settings
    pub fn new(url: &str) -> Result<Self, JotterError> {
        Self::with_config(url, &PoolConfig::default())
    }

    /// Create a new PostgreSQL store with custom pool settings
    ///
    /// Only the URL is checked here; connections are opened on first use.
    pub fn with_config(url: &str, config: &PoolConfig) -> Result<Self, JotterError> {
        let options = PgConnectOptions::from_str(url)
            .map_err(|e| JotterError::Config(format!("Invalid PostgreSQL URL: {}", e)))?;

        Ok(Self::with_options(options, config))
    }

    /// Create a store from the libpq environment (`PGHOST`, `PGUSER`, ...)
    pub fn from_pg_env(config: &PoolConfig) -> Self {
        Self::with_options(PgConnectOptions::new(), config)
    }

    fn with_options(options: PgConnectOptions, config: &PoolConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .max_lifetime(config.max_lifetime())
            .connect_lazy_with(options);

        Self { pool }
    }

    fn row_to_todo((id, title, summary): TodoRow) -> Todo {
        Todo { id, title, summary }
    }
}

fn query_failed(e: sqlx::Error) -> JotterError {
    JotterError::Store(format!("PostgreSQL query failed: {}", e))
}

#[async_trait]
impl TodoStore for PostgresStore {
    async fn insert(&self, todo: &NewTodo) -> Result<i64, JotterError> {
        sqlx::query_scalar::<_, i64>(INSERT_TODO)
            .bind(todo.title.as_deref())
            .bind(todo.summary.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed)
    }

    async fn get(&self, id: &str) -> Result<Option<TodoContent>, JotterError> {
        let row = sqlx::query_as::<_, (Option<String>, Option<String>)>(SELECT_TODO)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(row.map(|(title, summary)| TodoContent { title, summary }))
    }

    async fn list(&self) -> Result<Vec<Todo>, JotterError> {
        let rows = sqlx::query_as::<_, TodoRow>(SELECT_TODOS)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(rows.into_iter().map(Self::row_to_todo).collect())
    }

    async fn delete(&self, id: &str) -> Result<Option<Todo>, JotterError> {
        let row = sqlx::query_as::<_, TodoRow>(DELETE_TODO)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(row.map(Self::row_to_todo))
    }

    async fn close(&self) -> Result<(), JotterError> {
        self.pool.close().await;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), JotterError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| JotterError::Store(format!("PostgreSQL health check failed: {}", e)))?;
        Ok(())
    }

    fn store_type(&self) -> &'static str {
        "postgres"
    }
}
