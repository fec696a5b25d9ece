use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use super::error::ApiError;
use super::guard::require_todo;
use super::response::wrapped_response;
use crate::{context::RequestContext, state::AppState};

/// Generate a presigned attachment upload URL (POST /todos/{todoId}/attachment).
///
/// The object key is the todo identifier, so each todo holds at most one
/// attachment and a new upload replaces the previous one.
pub async fn generate_upload_url(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(todo_id): Path<String>,
) -> Result<Response, ApiError> {
    require_todo(
        state.todo_repo.as_ref(),
        &todo_id,
        ApiError::AttachmentTargetMissing {
            todo_id: todo_id.clone(),
        },
    )
    .await?;

    let upload = state
        .upload_signer
        .presign_upload(&todo_id, state.config.signed_url_expiration())
        .await
        .map_err(|source| ApiError::SigningFailed {
            todo_id: todo_id.clone(),
            source,
        })?;

    tracing::info!(
        request_id = %ctx.request_id,
        todo_id = %upload.key,
        expires_in_secs = upload.expires_in.as_secs(),
        "Issued attachment upload URL"
    );

    Ok(wrapped_response(StatusCode::OK, "uploadUrl", upload.url))
}
