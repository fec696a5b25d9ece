//! Attachment upload URL signing.

mod s3;

pub use s3::S3UploadSigner;

#[cfg(test)]
pub(crate) use s3::tests::offline_signer;
