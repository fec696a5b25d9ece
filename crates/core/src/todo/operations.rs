//! Pure functions over todo data.

/// Derives the object store URL for a todo's attachment.
///
/// Pattern: `https://<bucket>.s3.amazonaws.com/<todo_id>`
pub fn attachment_url(bucket: &str, todo_id: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{todo_id}")
}
