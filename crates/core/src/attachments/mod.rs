//! Attachment upload contracts.
//!
//! Attachments live in the object store under the todo's identifier. This
//! module only describes how a time-limited upload URL is obtained; signing
//! itself is implemented by the `todos` crate.

mod error;
mod traits;
mod types;

pub use error::AttachmentError;
pub use traits::UploadUrlSigner;
pub use types::PresignedUpload;
