//! Existence guard shared by every handler that targets an existing todo.

use todos_core::storage::{RepositoryError, TodoRepository};

use super::error::ApiError;

/// Returns true iff a record keyed by `todo_id` exists.
///
/// An empty identifier can never match, so the store is not queried.
pub async fn todo_exists(
    repo: &dyn TodoRepository,
    todo_id: &str,
) -> Result<bool, RepositoryError> {
    if todo_id.is_empty() {
        return Ok(false);
    }

    let exists = repo.todo_exists(todo_id).await?;
    tracing::debug!(todo_id = %todo_id, exists, "Checked todo existence");
    Ok(exists)
}

/// Requires the todo to exist, returning `missing` when it does not.
pub async fn require_todo(
    repo: &dyn TodoRepository,
    todo_id: &str,
    missing: ApiError,
) -> Result<(), ApiError> {
    match todo_exists(repo, todo_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(missing),
        Err(source) => Err(ApiError::LookupFailed {
            todo_id: todo_id.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use todos_core::todo::Todo;

    fn missing(todo_id: &str) -> ApiError {
        ApiError::TodoNotFound {
            todo_id: todo_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_existing_todo_passes() {
        let repo = InMemoryRepository::new();
        let todo = Todo::new("todos-attachments", "Buy milk", "2024-01-01");
        repo.create_todo(&todo).await.unwrap();

        assert!(todo_exists(&repo, &todo.todo_id).await.unwrap());
        assert!(require_todo(&repo, &todo.todo_id, missing(&todo.todo_id))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_unknown_todo_yields_supplied_error() {
        let repo = InMemoryRepository::new();

        let result = require_todo(&repo, "abc", missing("abc")).await;

        assert!(matches!(result, Err(ApiError::TodoNotFound { todo_id }) if todo_id == "abc"));
    }

    #[tokio::test]
    async fn test_empty_id_is_absent() {
        let repo = InMemoryRepository::new();

        assert!(!todo_exists(&repo, "").await.unwrap());
    }
}
