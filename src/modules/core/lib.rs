//! Core domain logic for Jotter
//!
//! This crate contains the configuration domain model and the error types
//! shared by every other Jotter crate.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::JotterError;
