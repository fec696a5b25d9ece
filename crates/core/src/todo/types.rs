use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::operations::attachment_url;

/// A todo item as stored in the entity store and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-generated identifier, never reassigned.
    pub todo_id: String,
    pub name: String,
    /// Date-valued string as supplied by the client.
    pub due_date: String,
    pub done: bool,
    /// Object store location for this todo's attachment.
    pub attachment_url: String,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new todo with a fresh identifier and its derived attachment URL.
    pub fn new(bucket: &str, name: impl Into<String>, due_date: impl Into<String>) -> Self {
        let todo_id = Uuid::new_v4().to_string();
        Self {
            attachment_url: attachment_url(bucket, &todo_id),
            todo_id,
            name: name.into(),
            due_date: due_date.into(),
            done: false,
            created_at: Utc::now(),
        }
    }

    /// Sets the completion flag.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}
