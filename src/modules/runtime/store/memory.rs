//! In-memory store implementation

use async_trait::async_trait;
use jotter_core::JotterError;
use jotter_types::{NewTodo, Todo, TodoContent};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::traits::TodoStore;

/// Process-local todo store.
///
/// Identifiers start at 1 and are never reused, like a `SERIAL` column.
/// Data is lost when the store is dropped.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                todos: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Interpret a path id the way PostgreSQL casts text to bigint
    fn parse_id(id: &str) -> Result<i64, JotterError> {
        id.trim().parse::<i64>().map_err(|_| {
            JotterError::Store(format!("invalid input syntax for type bigint: \"{}\"", id))
        })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn insert(&self, todo: &NewTodo) -> Result<i64, JotterError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.todos.insert(id, Todo::from_new(id, todo.clone()));
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<TodoContent>, JotterError> {
        let id = Self::parse_id(id)?;
        let inner = self.inner.read().await;
        Ok(inner.todos.get(&id).map(Todo::content))
    }

    async fn list(&self) -> Result<Vec<Todo>, JotterError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn delete(&self, id: &str) -> Result<Option<Todo>, JotterError> {
        let id = Self::parse_id(id)?;
        let mut inner = self.inner.write().await;
        Ok(inner.todos.remove(&id))
    }

    async fn close(&self) -> Result<(), JotterError> {
        Ok(())
    }

    async fn health_check(&self) -> Result<(), JotterError> {
        Ok(())
    }

    fn store_type(&self) -> &'static str {
        "memory"
    }
}
