//! Pure mapping from repository errors to HTTP status codes.
//!
//! Used by read paths. Mutating handlers map storage failures to their own
//! fixed responses.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `ConnectionFailed` -> 503
/// - `QueryFailed`, `InvalidData` -> 500
///
/// `InvalidData` is a server error here: it is raised when a stored item
/// cannot be decoded, never for client input.
///
/// # Examples
///
/// ```
/// use todos_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Todo",
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) | RepositoryError::InvalidData(_) => 500,
    }
}
