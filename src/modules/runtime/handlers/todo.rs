//! Todo CRUD handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    Json,
};
use jotter_types::{CreatedResponse, NewTodo, Todo, TodoContent};
use serde_json::Value;
use tracing::{debug, info};

use super::error::{ApiError, Operation};
use crate::state::AppState;

/// Handlers for the todo routes
pub struct TodoHandler;

impl TodoHandler {
    /// Handle POST /api/todo
    pub async fn create(
        State(state): State<AppState>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Json<CreatedResponse>, ApiError> {
        let todo = read_new_todo(&headers, &body)?;

        let id = state
            .store
            .insert(&todo)
            .await
            .map_err(|e| ApiError::store(Operation::Create, e))?;

        info!("Created todo {}", id);
        Ok(Json(CreatedResponse::new(id)))
    }

    /// Handle GET /api/todo/:id
    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<TodoContent>, ApiError> {
        debug!("Fetching todo {}", id);

        state
            .store
            .get(&id)
            .await
            .map_err(|e| ApiError::store(Operation::Get, e))?
            .map(Json)
            .ok_or(ApiError::NotFound)
    }

    /// Handle GET /api/todos
    pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
        let todos = state
            .store
            .list()
            .await
            .map_err(|e| ApiError::store(Operation::List, e))?;

        debug!("Listed {} todos", todos.len());
        Ok(Json(todos))
    }

    /// Handle DELETE /api/todo/:id
    pub async fn delete(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<Todo>, ApiError> {
        let deleted = state
            .store
            .delete(&id)
            .await
            .map_err(|e| ApiError::store(Operation::Delete, e))?
            .ok_or(ApiError::NotFound)?;

        info!("Deleted todo {}", deleted.id);
        Ok(Json(deleted))
    }
}

/// Read a create body the way a lenient JSON body parser would.
///
/// Bodies not declared as JSON, and empty bodies, carry no fields. Field
/// values are handed to the store as text whatever their JSON type. Only a
/// document that fails to parse, or a bare scalar, is rejected.
fn read_new_todo(headers: &HeaderMap, body: &[u8]) -> Result<NewTodo, ApiError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewTodo::default());
    }

    let document: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadBody(format!("Failed to parse the request body as JSON: {}", e)))?;

    match document {
        Value::Object(fields) => Ok(NewTodo {
            title: fields.get("title").and_then(field_text),
            summary: fields.get("summary").and_then(field_text),
        }),
        Value::Array(_) => Ok(NewTodo::default()),
        _ => Err(ApiError::BadBody(
            "The request body must be a JSON object or array".to_string(),
        )),
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn json_headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json(&json_headers("application/json")));
        assert!(is_json(&json_headers("application/json; charset=utf-8")));
        assert!(is_json(&json_headers("Application/JSON")));
        assert!(is_json(&json_headers("application/merge-patch+json")));
        assert!(!is_json(&json_headers("text/plain")));
        assert!(!is_json(&HeaderMap::new()));
    }

    #[test]
    fn test_field_values_become_text() {
        let todo = read_new_todo(
            &json_headers("application/json"),
            br#"{"title": 5, "summary": true}"#,
        )
        .unwrap();
        assert_eq!(todo.title.as_deref(), Some("5"));
        assert_eq!(todo.summary.as_deref(), Some("true"));

        let todo = read_new_todo(
            &json_headers("application/json"),
            br#"{"title": {"a": 1}, "summary": [1, "x"]}"#,
        )
        .unwrap();
        assert_eq!(todo.title.as_deref(), Some(r#"{"a":1}"#));
        assert_eq!(todo.summary.as_deref(), Some(r#"[1,"x"]"#));
    }

    #[test]
    fn test_null_and_missing_fields() {
        let todo = read_new_todo(&json_headers("application/json"), br#"{"title": null}"#).unwrap();
        assert_eq!(todo, NewTodo::default());
    }

    #[test]
    fn test_non_json_bodies_carry_no_fields() {
        let todo = read_new_todo(&json_headers("text/plain"), b"{not json").unwrap();
        assert_eq!(todo, NewTodo::default());

        let todo = read_new_todo(&HeaderMap::new(), br#"{"title": "x"}"#).unwrap();
        assert_eq!(todo, NewTodo::default());

        let todo = read_new_todo(&json_headers("application/json"), b"  ").unwrap();
        assert_eq!(todo, NewTodo::default());

        let todo = read_new_todo(&json_headers("application/json"), b"[1, 2]").unwrap();
        assert_eq!(todo, NewTodo::default());
    }

    #[test]
    fn test_broken_json_is_rejected() {
        let result = read_new_todo(&json_headers("application/json"), b"{not json");
        assert!(matches!(result, Err(ApiError::BadBody(_))));

        let result = read_new_todo(&json_headers("application/json"), b"42");
        assert!(matches!(result, Err(ApiError::BadBody(_))));
    }
}
