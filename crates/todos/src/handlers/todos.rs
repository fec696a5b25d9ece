use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde::de::DeserializeOwned;

use todos_core::todo::{CreateTodoRequest, UpdateTodoRequest};

use super::error::ApiError;
use super::guard::require_todo;
use super::response::{http_response, wrapped_response};
use crate::{context::RequestContext, state::AppState};

/// Parses a JSON body regardless of the request `Content-Type`.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// Create a todo (POST /todos).
pub async fn create_todo(
    State(state): State<AppState>,
    ctx: RequestContext,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: CreateTodoRequest = parse_body(&body)?;

    let todo = request.into_todo(&state.config.images_bucket);

    state
        .todo_repo
        .create_todo(&todo)
        .await
        .map_err(ApiError::CreateFailed)?;

    tracing::info!(
        request_id = %ctx.request_id,
        todo_id = %todo.todo_id,
        authenticated = ctx.has_token(),
        "Created todo"
    );

    Ok(wrapped_response(StatusCode::CREATED, "newItem", todo))
}

/// Get a single todo (GET /todos/{todoId}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<Response, ApiError> {
    let todo = state
        .todo_repo
        .get_todo(&todo_id)
        .await
        .map_err(|source| ApiError::ReadFailed {
            todo_id: todo_id.clone(),
            source,
        })?
        .ok_or_else(|| ApiError::TodoNotFound {
            todo_id: todo_id.clone(),
        })?;

    Ok(wrapped_response(StatusCode::OK, "item", todo))
}

/// Update a todo's name, due date and completion flag (PATCH/PUT /todos/{todoId}).
pub async fn update_todo(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(todo_id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: UpdateTodoRequest = parse_body(&body)?;

    require_todo(
        state.todo_repo.as_ref(),
        &todo_id,
        ApiError::TodoNotFound {
            todo_id: todo_id.clone(),
        },
    )
    .await?;

    let updated = state
        .todo_repo
        .update_todo(&todo_id, &request)
        .await
        .map_err(|source| ApiError::UpdateFailed {
            todo_id: todo_id.clone(),
            source,
        })?;

    tracing::info!(
        request_id = %ctx.request_id,
        todo_id = %todo_id,
        done = updated.done,
        "Updated todo"
    );

    Ok(http_response(StatusCode::OK, "Update successfully."))
}

/// Delete a todo (DELETE /todos/{todoId}).
pub async fn delete_todo(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(todo_id): Path<String>,
) -> Result<Response, ApiError> {
    require_todo(
        state.todo_repo.as_ref(),
        &todo_id,
        ApiError::TodoNotFound {
            todo_id: todo_id.clone(),
        },
    )
    .await?;

    state
        .todo_repo
        .delete_todo(&todo_id)
        .await
        .map_err(|source| ApiError::DeleteFailed {
            todo_id: todo_id.clone(),
            source,
        })?;

    tracing::info!(request_id = %ctx.request_id, todo_id = %todo_id, "Deleted todo");

    Ok(http_response(StatusCode::OK, "Deleted successfully."))
}
