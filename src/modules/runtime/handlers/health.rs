//! Liveness handler

use axum::{http::StatusCode, Json};
use jotter_types::MessageResponse;

/// Handler for the liveness probe
pub struct HealthHandler;

impl HealthHandler {
    /// Handle GET /api/healthz
    ///
    /// Never touches the store: it answers as long as the process accepts
    /// connections.
    pub async fn check() -> (StatusCode, Json<MessageResponse>) {
        (StatusCode::OK, Json(MessageResponse::new("I AM ALIVE!")))
    }
}
