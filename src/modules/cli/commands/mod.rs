//! CLI commands

mod completion;
mod run;

pub use completion::CompletionCommand;
pub use run::RunCommand;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

/// Jotter - a small JSON todo service backed by PostgreSQL
#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file. Without it, settings come from the
    /// environment (`DATABASE_URL`, `PORT`, ...) and `.env`.
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the Jotter server
    Run(RunCommand),

    /// Generate shell completions
    #[command(hide = true)]
    Completion(CompletionCommand),
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

impl Cli {
    /// Configuration file path, if one was given
    pub fn config_path(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

/// Map a configured log level (0=DEBUG .. 3=ERROR) to a tracing level
pub fn log_level(level: u8) -> Level {
    match level {
        0 => Level::DEBUG,
        1 => Level::INFO,
        2 => Level::WARN,
        _ => Level::ERROR,
    }
}
