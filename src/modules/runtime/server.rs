//! HTTP server for Jotter

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use jotter_core::{JotterError, Settings};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::handlers::{HealthHandler, TodoHandler};
use crate::state::AppState;
use crate::store::{create_store, TodoStore};

/// Runtime server for Jotter
pub struct Runtime {
    settings: Arc<Settings>,
    store: Arc<dyn TodoStore>,
}

/// Build the Axum router around a store handle
pub fn build_router(state: AppState) -> Router {
    // GET, POST and DELETE only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/api/healthz", get(HealthHandler::check))
        .route("/api/todo", post(TodoHandler::create))
        .route(
            "/api/todo/:id",
            get(TodoHandler::get).delete(TodoHandler::delete),
        )
        .route("/api/todos", get(TodoHandler::list))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

impl Runtime {
    /// Create a new runtime from settings
    pub async fn new(settings: Settings) -> Result<Self, JotterError> {
        Self::with_port_override(settings, None).await
    }

    /// Create a new runtime with an optional port override
    ///
    /// The store is probed in the background. An unreachable store is
    /// logged; requests then fail one by one instead of the process exiting.
    pub async fn with_port_override(
        settings: Settings,
        port_override: Option<u16>,
    ) -> Result<Self, JotterError> {
        let settings = match port_override {
            Some(port) => settings.with_port(port),
            None => settings,
        };

        let store = create_store(&settings.database)?;

        let background = store.clone();
        tokio::spawn(async move {
            match background.health_check().await {
                Ok(()) => info!("Database connected successfully"),
                Err(e) => error!("Database connection error: {}", e),
            }
        });

        Ok(Self::with_store(settings, store))
    }

    /// Create a runtime around an already constructed store
    pub fn with_store(settings: Settings, store: Arc<dyn TodoStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
        }
    }

    /// Build the Axum router for this runtime
    pub fn router(&self) -> Router {
        build_router(AppState::new(self.store.clone()))
    }

    /// Start the server
    pub async fn run(&self) -> Result<(), JotterError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.settings.port()));

        let app = self.router();

        info!("Starting {} on http://{}", self.settings.name, addr);
        info!("Store: {}", self.store.store_type());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| JotterError::Server(format!("Failed to bind: {}", e)))?;

        info!("Server is running on http://localhost:{}", self.settings.port());

        axum::serve(listener, app)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .map_err(|e| JotterError::Server(format!("Server error: {}", e)))?;

        info!("Server stopped");
        self.shutdown().await?;

        Ok(())
    }

    /// Wait for shutdown signal
    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                debug!("Received CTRL+C, shutting down...");
            }
            _ = terminate => {
                debug!("Received SIGTERM, shutting down...");
            }
        }
    }

    /// Gracefully shutdown the runtime
    pub async fn shutdown(&self) -> Result<(), JotterError> {
        info!("Closing database connections...");
        if let Err(e) = self.store.close().await {
            warn!("Error closing store: {}", e);
        }
        info!("Shutdown complete");
        Ok(())
    }

    /// Get the settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get the store
    pub fn store(&self) -> &Arc<dyn TodoStore> {
        &self.store
    }
}
