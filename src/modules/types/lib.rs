//! Type definitions for Jotter
//!
//! This crate contains the wire types shared across the Jotter workspace:
//! the todo entity, the JSON response bodies, and the store backend kinds.

pub mod response;
pub mod store;
pub mod todo;

pub use response::{CreatedResponse, MessageResponse};
pub use store::StoreKind;
pub use todo::{NewTodo, Todo, TodoContent};
