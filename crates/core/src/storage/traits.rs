use async_trait::async_trait;

use crate::todo::{Todo, UpdateTodoRequest};

use super::Result;

/// Repository for todo records, keyed by `todo_id`.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns true iff at least one record is stored under `todo_id`.
    async fn todo_exists(&self, todo_id: &str) -> Result<bool>;

    /// Gets a todo by its ID.
    async fn get_todo(&self, todo_id: &str) -> Result<Option<Todo>>;

    /// Stores a new todo. The write is unconditional.
    async fn create_todo(&self, todo: &Todo) -> Result<()>;

    /// Sets the mutable fields of an existing todo and returns the new values.
    async fn update_todo(
        &self,
        todo_id: &str,
        update: &UpdateTodoRequest,
    ) -> Result<UpdateTodoRequest>;

    /// Deletes a todo by its ID. Deleting an absent ID is not an error.
    async fn delete_todo(&self, todo_id: &str) -> Result<()>;
}
