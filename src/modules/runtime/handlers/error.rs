//! API error type
//!
//! Handlers fail when the todo is missing or the store could not complete
//! the call; create can also fail on a body that is not valid JSON. Store
//! causes are logged here and never reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jotter_core::JotterError;
use jotter_types::MessageResponse;
use tracing::{error, warn};

/// The store-backed operations, used to pick log context and client message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    List,
    Delete,
}

impl Operation {
    /// Message sent to the client when the store call fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Create => "Failed to insert todo",
            Operation::Get => "Failed to fetch todo",
            Operation::List => "Failed to fetch todos",
            Operation::Delete => "Failed to delete todo",
        }
    }

    fn log_context(&self) -> &'static str {
        match self {
            Operation::Create => "inserting todo",
            Operation::Get => "querying todo",
            Operation::List => "fetching todos",
            Operation::Delete => "deleting todo",
        }
    }
}

/// API error with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// The targeted todo does not exist (404)
    NotFound,

    /// The store call could not complete (500, cause logged)
    StoreFailure {
        operation: Operation,
        cause: JotterError,
    },

    /// The create body is declared as JSON but does not parse (400)
    BadBody(String),
}

impl ApiError {
    /// Wrap a store error raised while running `operation`
    pub fn store(operation: Operation, cause: JotterError) -> Self {
        Self::StoreFailure { operation, cause }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            Self::StoreFailure { operation, cause } => {
                error!("Error {}: {}", operation.log_context(), cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    operation.failure_message().to_string(),
                )
            }
            Self::BadBody(message) => {
                warn!("Rejected request body: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
