use thiserror::Error;

/// Errors that can occur while producing an upload URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("Invalid expiration: {0}")]
    InvalidExpiration(String),
    #[error("Signing failed: {0}")]
    SigningFailed(String),
    #[error("Signer produced an invalid URL: {0}")]
    InvalidUrl(String),
}
