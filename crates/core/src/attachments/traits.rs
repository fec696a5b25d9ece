use std::time::Duration;

use async_trait::async_trait;

use super::{AttachmentError, PresignedUpload};

/// Produces pre-signed write URLs for attachment objects.
#[async_trait]
pub trait UploadUrlSigner: Send + Sync {
    /// Signs a single `PUT` of the object stored under `key`, valid for `expires_in`.
    async fn presign_upload(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<PresignedUpload, AttachmentError>;
}
