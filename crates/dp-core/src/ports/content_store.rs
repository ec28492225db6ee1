use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use super::errors::ContentStoreError;

/// Cumulative bytes-transferred callback invoked by the store driver while
/// the file streams out.
pub type ProgressFn = Arc<dyn Fn(u64) + Send + Sync>;

/// A file handed to the content-addressed store.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: String,
    pub content: Bytes,
}

/// One entry of the store's add response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedEntry {
    pub name: String,
    pub hash: String,
    pub size: Option<String>,
}

#[async_trait]
pub trait ContentStorePort: Send + Sync {
    /// Directory-wrapped add of a single file.
    ///
    /// The store returns one entry per added object in emission order and
    /// the wrapping directory's CID is the last entry. That ordering is part
    /// of the store's documented contract and callers rely on it.
    async fn add(
        &self,
        file: FileEntry,
        progress: ProgressFn,
    ) -> Result<Vec<AddedEntry>, ContentStoreError>;
}
