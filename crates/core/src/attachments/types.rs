use std::time::Duration;

/// A signed, time-limited URL authorizing one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUpload {
    /// Object key the URL writes to.
    pub key: String,
    pub url: String,
    pub expires_in: Duration,
}
