//! Jotter CLI
//!
//! This crate provides the command-line interface for Jotter:
//! - run: Start the server
//! - completion: Print shell completions

pub mod commands;

pub use commands::{log_level, Cli, Commands, LogFormat};
