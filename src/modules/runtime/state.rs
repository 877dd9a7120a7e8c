//! Shared runtime application state (HTTP handlers)

use std::sync::Arc;

use crate::store::TodoStore;

/// Application state shared across handlers.
///
/// Holds nothing but the store handle; every request is otherwise independent.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}
