use thiserror::Error;

use crate::ports::ContentStoreError;

/// Errors surfaced by the upload mediator.
///
/// A failed gateway reachability check is deliberately not represented
/// here: once the store accepted the file the upload completes, and the
/// check result is only logged.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The content store rejected the add; nothing was published.
    #[error("adding to the content store failed: {0}")]
    StoreFailure(String),

    /// An upload is already in progress on this mediator.
    #[error("an upload is already in progress")]
    NotIdle,
}

impl From<ContentStoreError> for UploadError {
    fn from(err: ContentStoreError) -> Self {
        Self::StoreFailure(err.to_string())
    }
}
