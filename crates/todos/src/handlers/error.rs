//! Handler-level errors.
//!
//! `ApiError` is where domain failures become HTTP responses. The cause is
//! logged and never returned to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use todos_core::attachments::AttachmentError;
use todos_core::storage::{repository_error_to_status_code, RepositoryError};

use super::response::{wrapped_response, MESSAGE_FIELD};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Todo {todo_id} not found")]
    TodoNotFound { todo_id: String },

    #[error("Attachment target {todo_id} not found")]
    AttachmentTargetMissing { todo_id: String },

    #[error("Existence check for {todo_id} failed: {source}")]
    LookupFailed {
        todo_id: String,
        source: RepositoryError,
    },

    #[error("Create failed: {0}")]
    CreateFailed(RepositoryError),

    #[error("Read of {todo_id} failed: {source}")]
    ReadFailed {
        todo_id: String,
        source: RepositoryError,
    },

    #[error("Update of {todo_id} failed: {source}")]
    UpdateFailed {
        todo_id: String,
        source: RepositoryError,
    },

    #[error("Delete of {todo_id} failed: {source}")]
    DeleteFailed {
        todo_id: String,
        source: RepositoryError,
    },

    #[error("Signing upload URL for {todo_id} failed: {source}")]
    SigningFailed {
        todo_id: String,
        source: AttachmentError,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::TodoNotFound { .. } | Self::AttachmentTargetMissing { .. } => {
                StatusCode::NOT_FOUND
            }
            // A failed write is reported as a client error.
            Self::UpdateFailed { .. } | Self::DeleteFailed { .. } => StatusCode::BAD_REQUEST,
            Self::ReadFailed { source, .. } => {
                StatusCode::from_u16(repository_error_to_status_code(source))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::LookupFailed { .. } | Self::CreateFailed(_) | Self::SigningFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Top-level JSON field of the error body.
    pub fn field(&self) -> &'static str {
        match self {
            Self::AttachmentTargetMissing { .. } | Self::SigningFailed { .. } => "error",
            _ => MESSAGE_FIELD,
        }
    }

    /// Message returned to the client.
    pub fn public_message(&self) -> String {
        match self {
            Self::MalformedBody(_) => self.to_string(),
            Self::TodoNotFound { .. } => "Todo item not found.".to_string(),
            Self::AttachmentTargetMissing { .. } => "Todo item does not exists.".to_string(),
            Self::LookupFailed { .. } => "Failed to look up todo item.".to_string(),
            Self::CreateFailed(_) => "Failed to create todo item.".to_string(),
            Self::ReadFailed { .. } => "Failed to read todo item.".to_string(),
            Self::UpdateFailed { .. } => "Failed to update todo item.".to_string(),
            Self::DeleteFailed { .. } => "Failed to delete todo item.".to_string(),
            Self::SigningFailed { .. } => "Failed to generate upload URL.".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }

        wrapped_response(status, self.field(), self.public_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn query_failed() -> RepositoryError {
        RepositoryError::QueryFailed("Throughput exceeded".to_string())
    }

    #[tokio::test]
    async fn test_not_found_hides_identifier() {
        let (status, body) = body_json(ApiError::TodoNotFound {
            todo_id: "abc".to_string(),
        })
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "message": "Todo item not found." }));
    }

    #[tokio::test]
    async fn test_attachment_errors_use_error_field() {
        let (status, body) = body_json(ApiError::AttachmentTargetMissing {
            todo_id: "abc".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "Todo item does not exists." }));

        let (status, body) = body_json(ApiError::SigningFailed {
            todo_id: "abc".to_string(),
            source: AttachmentError::SigningFailed("no credentials".to_string()),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "error": "Failed to generate upload URL." })
        );
    }

    #[tokio::test]
    async fn test_write_failures_are_bad_requests_without_cause() {
        let (status, body) = body_json(ApiError::UpdateFailed {
            todo_id: "abc".to_string(),
            source: query_failed(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "message": "Failed to update todo item." }));

        let (status, body) = body_json(ApiError::DeleteFailed {
            todo_id: "abc".to_string(),
            source: query_failed(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "message": "Failed to delete todo item." }));
    }

    #[tokio::test]
    async fn test_create_and_lookup_failures_are_server_errors() {
        let (status, body) = body_json(ApiError::CreateFailed(query_failed())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "message": "Failed to create todo item." }));

        let (status, body) = body_json(ApiError::LookupFailed {
            todo_id: "abc".to_string(),
            source: query_failed(),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "message": "Failed to look up todo item." }));
    }

    #[test]
    fn test_read_failure_status_follows_repository_error() {
        let unavailable = ApiError::ReadFailed {
            todo_id: "abc".to_string(),
            source: RepositoryError::ConnectionFailed("Could not reach DynamoDB".to_string()),
        };
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let corrupt = ApiError::ReadFailed {
            todo_id: "abc".to_string(),
            source: RepositoryError::InvalidData("Missing field: name".to_string()),
        };
        assert_eq!(corrupt.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_malformed_body_message_has_prefix() {
        let parse_error = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        let (status, body) = body_json(ApiError::MalformedBody(parse_error)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body: "));
    }
}
