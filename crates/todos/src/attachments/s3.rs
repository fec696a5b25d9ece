//! S3 upload URL signer.
//!
//! Presigning is a local SigV4 computation over the bucket, key, method and
//! expiration; no request is sent to S3.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use url::Url;

use todos_core::attachments::{AttachmentError, PresignedUpload, UploadUrlSigner};

/// Signs `PutObject` requests against a single bucket.
pub struct S3UploadSigner {
    client: Client,
    bucket: String,
}

impl S3UploadSigner {
    /// Creates a signer with the given S3 client and bucket name.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Creates a signer from shared AWS configuration (default credential chain).
    pub fn from_sdk_config(config: &SdkConfig, bucket: impl Into<String>) -> Self {
        Self::new(Client::new(config), bucket)
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl UploadUrlSigner for S3UploadSigner {
    async fn presign_upload(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<PresignedUpload, AttachmentError> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| AttachmentError::InvalidExpiration(e.to_string()))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| AttachmentError::SigningFailed(format!("{e:?}")))?;

        let url = Url::parse(request.uri())
            .map_err(|e| AttachmentError::InvalidUrl(format!("{}: {e}", request.uri())))?;

        tracing::debug!(
            bucket = %self.bucket,
            key = %key,
            expires_in_secs = expires_in.as_secs(),
            "Presigned attachment upload"
        );

        Ok(PresignedUpload {
            key: key.to_string(),
            url: url.to_string(),
            expires_in,
        })
    }
}
