//! Runtime server for Jotter
//!
//! This crate provides the HTTP server, the todo stores, and the request
//! handlers for the Jotter todo service.

pub mod handlers;
pub mod server;
pub mod state;
pub mod store;

pub use handlers::{ApiError, HealthHandler, Operation, TodoHandler};
pub use server::{build_router, Runtime};
pub use state::AppState;
pub use store::{create_store, MemoryStore, PostgresStore, TodoStore};
