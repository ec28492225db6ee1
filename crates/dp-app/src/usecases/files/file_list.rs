use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{debug, info_span, warn, Instrument};

use dp_core::files::{Compression, FileDescriptor, FileListChanged};
use dp_core::ports::{FileListSinkPort, UrlCheckPort};

/// Ordered collection of file descriptors for the publish form.
///
/// Mutations are serialized behind a single mutex: the UI can fire `add`
/// and `remove` in quick succession and two mutations must never
/// interleave. The change notification goes out before the lock is
/// released, so the sink sees snapshots in mutation order.
/// Index is positional, not an identity — callers recompute
/// indices after every change notification.
pub struct FileListManager {
    url_check: Arc<dyn UrlCheckPort>,
    sink: Arc<dyn FileListSinkPort>,
    inner: Mutex<ListState>,
}

struct ListState {
    files: Vec<FileDescriptor>,
    form_open: bool,
}

impl FileListManager {
    pub fn new(url_check: Arc<dyn UrlCheckPort>, sink: Arc<dyn FileListSinkPort>) -> Self {
        Self {
            url_check,
            sink,
            inner: Mutex::new(ListState {
                files: Vec::new(),
                form_open: false,
            }),
        }
    }

    /// Show or hide the add-file input form. Returns the new visibility.
    pub async fn toggle_form(&self) -> bool {
        let mut state = self.inner.lock().await;
        state.form_open = !state.form_open;
        state.form_open
    }

    pub async fn is_form_open(&self) -> bool {
        self.inner.lock().await.form_open
    }

    /// Snapshot of the current collection, in insertion order.
    pub async fn files(&self) -> Vec<FileDescriptor> {
        self.inner.lock().await.files.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.files.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Append a descriptor for `url`, enriched by the URL-check backend
    /// when it answers.
    ///
    /// A failing lookup never blocks the add: the descriptor is appended
    /// with `found = false` and no enrichment fields, so a broken backend
    /// cannot lose user input. No dedup, no sort. A blank url is a no-op:
    /// every listed entry must carry a non-empty url.
    pub async fn add(&self, url: &str) -> Result<()> {
        let span = info_span!("usecase.files.add", url = %url);
        self.add_inner(url).instrument(span).await
    }

    async fn add_inner(&self, url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            debug!("ignoring blank url");
            return Ok(());
        }

        let mut descriptor = FileDescriptor::new(url);

        match self.url_check.check(url).await {
            Ok(result) => {
                // a lookup without a content type still classifies, as `none`
                descriptor.compression = Some(Compression::classify(
                    result.content_type.as_deref().unwrap_or_default(),
                ));
                descriptor.content_length = result.content_length;
                descriptor.content_type = result.content_type;
                descriptor.found = result.found;
                debug!(found = descriptor.found, "url check answered");
            }
            Err(err) => {
                warn!(error = %err, "url check failed, keeping unenriched descriptor");
            }
        }

        let mut state = self.inner.lock().await;
        state.files.push(descriptor);
        // adding collapses the input form
        state.form_open = false;
        let change = FileListChanged::new(state.files.clone());
        // delivered under the lock so snapshots reach the sink in
        // mutation order
        self.notify(change).await;
        Ok(())
    }

    /// Remove the descriptor at `index`; later entries shift down by one.
    ///
    /// Out-of-range indices are a no-op and emit no notification.
    pub async fn remove(&self, index: usize) {
        let mut state = self.inner.lock().await;
        if index >= state.files.len() {
            debug!(index, len = state.files.len(), "ignoring out-of-range removal");
            return;
        }
        state.files.remove(index);
        let change = FileListChanged::new(state.files.clone());
        self.notify(change).await;
    }

    async fn notify(&self, change: FileListChanged) {
        if let Err(err) = self.sink.files_changed(change).await {
            warn!(error = %err, "file list sink rejected change notification");
        }
    }
}
