//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{Todo, UpdateTodoRequest};

/// In-memory storage backend.
///
/// Mirrors the DynamoDB write semantics: inserts and deletes are
/// unconditional, updates require the record to exist.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<HashMap<String, Todo>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn todo_exists(&self, todo_id: &str) -> Result<bool> {
        let todos = self.todos.read().await;
        Ok(todos.contains_key(todo_id))
    }

    async fn get_todo(&self, todo_id: &str) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.get(todo_id).cloned())
    }

    async fn create_todo(&self, todo: &Todo) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.insert(todo.todo_id.clone(), todo.clone());
        Ok(())
    }

    async fn update_todo(
        &self,
        todo_id: &str,
        update: &UpdateTodoRequest,
    ) -> Result<UpdateTodoRequest> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .get_mut(todo_id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Todo",
                id: todo_id.to_string(),
            })?;
        update.apply_to(todo);
        Ok(update.clone())
    }

    async fn delete_todo(&self, todo_id: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.remove(todo_id);
        Ok(())
    }
}
