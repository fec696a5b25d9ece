use axum::{http::StatusCode, response::Response};

use super::response::http_response;

/// Fallback for unmatched routes.
pub async fn route_not_found() -> Response {
    http_response(StatusCode::NOT_FOUND, "Route not found.")
}
