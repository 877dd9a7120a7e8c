//! Jotter CLI
//!
//! Command-line entry point for the Jotter todo service.

use clap::Parser;
use jotter_cli::{log_level, Cli, Commands, LogFormat};
use jotter_core::JotterError;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), JotterError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Run(cmd) => {
            // Settings decide the log level, so they load before logging starts
            let settings = cmd.settings(cli.config_path())?;

            let level = if cli.verbose {
                Level::DEBUG
            } else {
                log_level(settings.log_level())
            };
            init_logging(level, cli.log_format);

            cmd.execute(settings).await?;
        }
        Commands::Completion(cmd) => {
            cmd.execute();
        }
    }

    Ok(())
}

/// Install the global subscriber; `RUST_LOG` overrides `level`
fn init_logging(level: Level, format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
    }
}
