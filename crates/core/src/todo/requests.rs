//! API request types for todo operations.
//!
//! Pure data types shared by the handlers and their tests.

use serde::{Deserialize, Serialize};

use super::types::Todo;

/// Request payload for creating a new todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub name: String,
    pub due_date: String,
    #[serde(default)]
    pub done: bool,
}

impl CreateTodoRequest {
    /// Create a new request for an open todo.
    pub fn new(name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: due_date.into(),
            done: false,
        }
    }

    /// Convert into a Todo stored under a freshly generated identifier.
    pub fn into_todo(self, bucket: &str) -> Todo {
        Todo::new(bucket, self.name, self.due_date).with_done(self.done)
    }
}

/// Request payload for updating a todo.
///
/// Carries exactly the mutable fields; the identifier and attachment URL
/// cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub name: String,
    pub due_date: String,
    pub done: bool,
}

impl UpdateTodoRequest {
    pub fn new(name: impl Into<String>, due_date: impl Into<String>, done: bool) -> Self {
        Self {
            name: name.into(),
            due_date: due_date.into(),
            done,
        }
    }

    /// Apply the update to an existing todo.
    pub fn apply_to(&self, todo: &mut Todo) {
        todo.name = self.name.clone();
        todo.due_date = self.due_date.clone();
        todo.done = self.done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_done_defaults_to_false() {
        let request: CreateTodoRequest =
            serde_json::from_str(r#"{"name":"Buy milk","dueDate":"2024-01-01"}"#).unwrap();

        assert_eq!(request, CreateTodoRequest::new("Buy milk", "2024-01-01"));
    }

    #[test]
    fn test_create_request_requires_due_date() {
        let result = serde_json::from_str::<CreateTodoRequest>(r#"{"name":"Buy milk"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_todo_keeps_caller_fields() {
        let mut request = CreateTodoRequest::new("Buy milk", "2024-01-01");
        request.done = true;

        let todo = request.into_todo("images");

        assert_eq!(todo.name, "Buy milk");
        assert_eq!(todo.due_date, "2024-01-01");
        assert!(todo.done);
        assert_eq!(
            todo.attachment_url,
            format!("https://images.s3.amazonaws.com/{}", todo.todo_id)
        );
    }

    #[test]
    fn test_update_request_requires_done() {
        let result =
            serde_json::from_str::<UpdateTodoRequest>(r#"{"name":"a","dueDate":"2024-01-01"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_to_leaves_identity_untouched() {
        let mut todo = Todo::new("images", "Buy milk", "2024-01-01");
        let original = todo.clone();

        UpdateTodoRequest::new("Buy oat milk", "2024-02-01", true).apply_to(&mut todo);

        assert_eq!(todo.todo_id, original.todo_id);
        assert_eq!(todo.attachment_url, original.attachment_url);
        assert_eq!(todo.created_at, original.created_at);
        assert_eq!(todo.name, "Buy oat milk");
        assert_eq!(todo.due_date, "2024-02-01");
        assert!(todo.done);
    }
}
