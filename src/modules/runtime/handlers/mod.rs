//! HTTP request handlers for the Jotter server
//!
//! This module contains the health check, the four todo operations, and the
//! mapping from store failures to HTTP responses.

mod error;
mod health;
mod todo;

pub use error::{ApiError, Operation};
pub use health::HealthHandler;
pub use todo::TodoHandler;
