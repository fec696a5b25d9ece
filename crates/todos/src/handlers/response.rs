//! Response shaping shared by every handler.
//!
//! All bodies are JSON objects with a single top-level field and every
//! response allows any origin.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Field used by `http_response`.
pub const MESSAGE_FIELD: &str = "message";

/// Build `{ "message": <message> }` with the given status.
pub fn http_response(status: StatusCode, message: impl Into<String>) -> Response {
    wrapped_response(status, MESSAGE_FIELD, message.into())
}

/// Build `{ <field>: <payload> }` with the given status.
pub fn wrapped_response<T: Serialize>(status: StatusCode, field: &str, payload: T) -> Response {
    let value = match serde_json::to_value(payload) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(field = %field, error = %e, "Failed to serialize response payload");
            return with_cors(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(single_field(MESSAGE_FIELD, Value::from("Internal server error."))),
                )
                    .into_response(),
            );
        }
    };

    with_cors((status, Json(single_field(field, value))).into_response())
}

fn single_field(field: &str, value: Value) -> Value {
    let mut body = Map::with_capacity(1);
    body.insert(field.to_string(), value);
    Value::Object(body)
}

fn with_cors(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_http_response_wraps_message() {
        let response = http_response(StatusCode::NOT_FOUND, "Todo item not found.");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Todo item not found." })
        );
    }

    #[tokio::test]
    async fn test_wrapped_response_uses_field_name() {
        let response = wrapped_response(
            StatusCode::OK,
            "uploadUrl",
            "https://todos-attachments.s3.amazonaws.com/abc?X-Amz-Expires=300",
        );

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "uploadUrl": "https://todos-attachments.s3.amazonaws.com/abc?X-Amz-Expires=300"
            })
        );
    }
}
