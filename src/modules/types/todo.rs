//! Todo entity types

use serde::{Deserialize, Serialize};

/// A stored todo, as returned by list and delete
///
/// `title` and `summary` are nullable: the create endpoint does not require
/// them, and whatever the store accepted is echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier
    pub id: i64,
    pub title: Option<String>,
    pub summary: Option<String>,
}

impl Todo {
    /// Build a todo from an assigned id and the submitted fields
    pub fn from_new(id: i64, new: NewTodo) -> Self {
        Self {
            id,
            title: new.title,
            summary: new.summary,
        }
    }

    /// Drop the id, leaving the body returned by get-by-id
    pub fn content(&self) -> TodoContent {
        TodoContent {
            title: self.title.clone(),
            summary: self.summary.clone(),
        }
    }
}

/// Todo fields without the id (get-by-id response)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoContent {
    pub title: Option<String>,
    pub summary: Option<String>,
}

/// Create request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            summary: Some(summary.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_missing_fields() {
        let new: NewTodo = serde_json::from_str("{}").unwrap();
        assert_eq!(new, NewTodo::default());

        let new: NewTodo = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(new.title.as_deref(), Some("Buy milk"));
        assert!(new.summary.is_none());
    }

    #[test]
    fn test_todo_serializes_nulls() {
        let todo = Todo {
            id: 3,
            title: Some("Buy milk".to_string()),
            summary: None,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "title": "Buy milk", "summary": null})
        );
    }

    #[test]
    fn test_content_omits_id() {
        let todo = Todo::from_new(1, NewTodo::new("Buy milk", "2%"));
        let json = serde_json::to_value(todo.content()).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Buy milk", "summary": "2%"}));
    }
}
