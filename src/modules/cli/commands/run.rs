//! Run command implementation

use clap::Args;
use jotter_config::ConfigValidator;
use jotter_core::{JotterError, Settings};
use jotter_runtime::Runtime;
use jotter_types::StoreKind;
use tracing::info;

/// Run command arguments
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Override server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the store connection string
    #[arg(long)]
    pub database_url: Option<String>,

    /// Override the store backend (postgres, memory)
    #[arg(long)]
    pub store: Option<StoreKind>,
}

impl RunCommand {
    /// Resolve settings: file or environment, then CLI overrides, then validation
    pub fn settings(&self, config_path: Option<&str>) -> Result<Settings, JotterError> {
        let mut settings = jotter_config::read(config_path)?;

        if let Some(store) = self.store {
            settings.database.store = store;
        }
        if let Some(url) = &self.database_url {
            settings.database.url = Some(url.clone());
        }
        if let Some(port) = self.port {
            settings = settings.with_port(port);
        }

        ConfigValidator::new().validate(&settings)?;
        Ok(settings)
    }

    /// Execute the run command
    pub async fn execute(&self, settings: Settings) -> Result<(), JotterError> {
        match settings.database.store {
            StoreKind::Postgres => info!("Using PostgreSQL store"),
            StoreKind::Memory => info!("Using in-memory store; todos are lost on exit"),
        }

        let runtime = Runtime::new(settings).await?;
        runtime.run().await?;

        Ok(())
    }
}
