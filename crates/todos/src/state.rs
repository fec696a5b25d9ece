//! Application state shared by all handlers.
//!
//! Holds the injected storage and signing handles. The storage backend is
//! chosen by feature flag; see `crate::storage`.

use std::sync::Arc;

use aws_config::SdkConfig;

use todos_core::attachments::UploadUrlSigner;
use todos_core::storage::TodoRepository;

use crate::attachments::S3UploadSigner;
use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request; the handles inside are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Todo record storage.
    pub todo_repo: Arc<dyn TodoRepository>,
    /// Presigned upload URL generator.
    pub upload_signer: Arc<dyn UploadUrlSigner>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        todo_repo: Arc<dyn TodoRepository>,
        upload_signer: Arc<dyn UploadUrlSigner>,
        config: Config,
    ) -> Self {
        Self {
            todo_repo,
            upload_signer,
            config,
        }
    }

    /// Builds the state for the compiled storage backend.
    pub fn from_config(config: Config, aws_config: &SdkConfig) -> Self {
        let todo_repo = storage_backend(&config, aws_config);
        let upload_signer =
            S3UploadSigner::from_sdk_config(aws_config, config.images_bucket.clone());

        tracing::info!(
            bucket = %upload_signer.bucket(),
            signed_url_expiration_secs = config.signed_url_expiration_seconds,
            "Attachment uploads signed for S3"
        );

        Self::new(todo_repo, Arc::new(upload_signer), config)
    }
}

#[cfg(feature = "inmemory")]
fn storage_backend(_config: &Config, _aws_config: &SdkConfig) -> Arc<dyn TodoRepository> {
    tracing::info!("Using in-memory todo storage");
    Arc::new(crate::storage::InMemoryRepository::new())
}

#[cfg(feature = "dynamodb")]
fn storage_backend(config: &Config, aws_config: &SdkConfig) -> Arc<dyn TodoRepository> {
    let client = aws_sdk_dynamodb::Client::new(aws_config);
    let repo = crate::storage::DynamoDbRepository::new(client, config.todos_table.clone());
    tracing::info!(table = %repo.table_name(), "Using DynamoDB todo storage");
    Arc::new(repo)
}
