//! JSON response bodies

use serde::{Deserialize, Serialize};

/// Body carrying only a human-readable message
///
/// Used by the health check and by every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    /// Identifier assigned by the store
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: "Todo created successfully".to_string(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response() {
        let json = serde_json::to_value(CreatedResponse::new(1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Todo created successfully", "id": 1})
        );
    }

    #[test]
    fn test_message_response() {
        let response = MessageResponse::new("Todo not found");
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"message":"Todo not found"}"#
        );
    }
}
