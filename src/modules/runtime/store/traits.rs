//! Store trait definition

use async_trait::async_trait;
use jotter_core::JotterError;
use jotter_types::{NewTodo, Todo, TodoContent};

/// Trait for todo stores
///
/// Each method is a single round trip to the backing store. Identifiers are
/// passed through exactly as they arrived in the request path; a store that
/// cannot interpret one reports [`JotterError::Store`], not "not found".
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert a todo and return the identifier the store assigned
    async fn insert(&self, todo: &NewTodo) -> Result<i64, JotterError>;

    /// Fetch the title and summary of one todo
    async fn get(&self, id: &str) -> Result<Option<TodoContent>, JotterError>;

    /// Fetch every todo, in whatever order the store yields them
    async fn list(&self) -> Result<Vec<Todo>, JotterError>;

    /// Remove one todo, returning the row as it was before deletion
    async fn delete(&self, id: &str) -> Result<Option<Todo>, JotterError>;

    /// Close the store and release resources
    async fn close(&self) -> Result<(), JotterError>;

    /// Check if the store is reachable
    async fn health_check(&self) -> Result<(), JotterError>;

    /// Get the store type name
    fn store_type(&self) -> &'static str;
}
