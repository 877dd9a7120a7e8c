//! Error types for Jotter

use thiserror::Error;

/// Main error type for Jotter operations
#[derive(Error, Debug)]
pub enum JotterError {
    /// The store call could not complete (connectivity, bad query, constraint)
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration file parsing error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Environment variable not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JotterError::Store("connection refused".into());
        assert_eq!(err.to_string(), "Store error: connection refused");

        let err = JotterError::EnvVarNotFound("DATABASE_URL, PORT".into());
        assert_eq!(
            err.to_string(),
            "Environment variable not found: DATABASE_URL, PORT"
        );
    }
}
