use anyhow::Result;
use async_trait::async_trait;

use crate::files::FileListChanged;

/// Parent-owned handler for file list mutations.
///
/// Receives a full snapshot of the collection on every add/remove.
#[async_trait]
pub trait FileListSinkPort: Send + Sync {
    async fn files_changed(&self, change: FileListChanged) -> Result<()>;
}
