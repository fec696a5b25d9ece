//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and todo
//! types. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use todos_core::storage::RepositoryError;
use todos_core::todo::{Todo, UpdateTodoRequest};

/// Partition key attribute of the todos table.
pub const TODO_ID: &str = "todoId";

/// Convert a Todo to a DynamoDB item.
pub fn todo_to_item(todo: &Todo) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(TODO_ID.to_string(), AttributeValue::S(todo.todo_id.clone()));
    item.insert("name".to_string(), AttributeValue::S(todo.name.clone()));
    item.insert(
        "dueDate".to_string(),
        AttributeValue::S(todo.due_date.clone()),
    );
    item.insert("done".to_string(), AttributeValue::Bool(todo.done));
    item.insert(
        "attachmentUrl".to_string(),
        AttributeValue::S(todo.attachment_url.clone()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(todo.created_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a Todo.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<Todo, RepositoryError> {
    Ok(Todo {
        todo_id: get_string(item, TODO_ID)?,
        name: get_string(item, "name")?,
        due_date: get_string(item, "dueDate")?,
        done: get_optional_bool(item, "done")?.unwrap_or(false),
        attachment_url: get_string(item, "attachmentUrl")?,
        created_at: get_datetime(item, "createdAt")?,
    })
}

/// Convert the `UPDATED_NEW` attributes of an UpdateItem call back into an update.
pub fn attributes_to_update(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<UpdateTodoRequest, RepositoryError> {
    Ok(UpdateTodoRequest {
        name: get_string(attributes, "name")?,
        due_date: get_string(attributes, "dueDate")?,
        done: get_optional_bool(attributes, "done")?
            .ok_or_else(|| RepositoryError::InvalidData("Missing field: done".to_string()))?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional boolean attribute; present but non-boolean is an error.
fn get_optional_bool(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<bool>, RepositoryError> {
    match item.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(|b| Some(*b))
            .map_err(|_| RepositoryError::InvalidData(format!("Invalid boolean field: {}", key))),
    }
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> Todo {
        Todo {
            todo_id: "550e8400-e29b-41d4-a716-446655440003".to_string(),
            name: "Buy milk".to_string(),
            due_date: "2024-01-01".to_string(),
            done: false,
            attachment_url:
                "https://todos-attachments.s3.amazonaws.com/550e8400-e29b-41d4-a716-446655440003"
                    .to_string(),
            created_at: DateTime::parse_from_rfc3339("2024-01-15T08:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_todo_item_is_keyed_by_todo_id() {
        let todo = sample_todo();
        let item = todo_to_item(&todo);

        assert_eq!(
            item.get("todoId").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440003"
        );
        assert_eq!(item.get("done").unwrap().as_bool().unwrap(), &false);
    }

    #[test]
    fn test_todo_survives_item_conversion() {
        let todo = sample_todo();
        let parsed = item_to_todo(&todo_to_item(&todo)).unwrap();

        assert_eq!(parsed, todo);
    }

    #[test]
    fn test_item_without_done_defaults_to_open() {
        let todo = sample_todo();
        let mut item = todo_to_item(&todo);
        item.remove("done");

        assert!(!item_to_todo(&item).unwrap().done);
    }

    #[test]
    fn test_item_missing_attachment_url_is_invalid() {
        let mut item = todo_to_item(&sample_todo());
        item.remove("attachmentUrl");

        assert!(matches!(
            item_to_todo(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_attributes_to_update() {
        let mut attributes = HashMap::new();
        attributes.insert("name".to_string(), AttributeValue::S("Buy bread".to_string()));
        attributes.insert(
            "dueDate".to_string(),
            AttributeValue::S("2024-01-02".to_string()),
        );
        attributes.insert("done".to_string(), AttributeValue::Bool(true));

        let update = attributes_to_update(&attributes).unwrap();

        assert_eq!(update, UpdateTodoRequest::new("Buy bread", "2024-01-02", true));
    }

    #[test]
    fn test_non_boolean_done_is_invalid() {
        let mut item = todo_to_item(&sample_todo());
        item.insert("done".to_string(), AttributeValue::S("yes".to_string()));

        assert!(item_to_todo(&item).is_err());
    }
}
