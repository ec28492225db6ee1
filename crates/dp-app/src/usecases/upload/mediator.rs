use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use dp_core::ports::{ContentStoreError, ContentStorePort, FileEntry, GatewayPort, ProgressFn};
use dp_core::upload::{UploadError, UploadSession, UploadState};

/// A file picked for upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub content: Bytes,
}

/// Drives one file at a time through the content store and the gateway
/// check, tracking byte-level progress.
///
/// One session per mediator: starting an upload while another is active
/// fails with [`UploadError::NotIdle`]. There is no cancel — discarding
/// the mediator is the only way to abandon a running upload.
pub struct UploadMediator {
    store: Arc<dyn ContentStorePort>,
    gateway: Arc<dyn GatewayPort>,
    gateway_base: String,
    // parking_lot: the store driver's progress callback is synchronous
    session: Arc<Mutex<UploadSession>>,
    loading: AtomicBool,
}

impl UploadMediator {
    pub fn new(
        store: Arc<dyn ContentStorePort>,
        gateway: Arc<dyn GatewayPort>,
        gateway_base: impl Into<String>,
    ) -> Self {
        Self {
            store,
            gateway,
            gateway_base: gateway_base.into(),
            session: Arc::new(Mutex::new(UploadSession::new())),
            loading: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> UploadSession {
        self.session.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Upload `file` to the content store and return its native URL.
    ///
    /// The gateway URL is pinged before completion to make the content
    /// globally available, but only the native URL is returned — it is the
    /// canonical stored value. A failed ping is logged and does not abort
    /// completion.
    pub async fn upload(&self, file: FileUpload) -> Result<String, UploadError> {
        let span = info_span!(
            "usecase.upload.execute",
            file = %file.name,
            total_bytes = file.content.len(),
        );
        self.upload_inner(file).instrument(span).await
    }

    async fn upload_inner(&self, file: FileUpload) -> Result<String, UploadError> {
        {
            let mut session = self.session.lock();
            if session.state.is_active() {
                return Err(UploadError::NotIdle);
            }
            *session = UploadSession::begin(file.content.len() as u64);
        }
        self.loading.store(true, Ordering::SeqCst);

        let progress: ProgressFn = {
            let session = Arc::clone(&self.session);
            Arc::new(move |bytes_so_far| {
                let mut session = session.lock();
                session.record_progress(bytes_so_far);
                debug!(message = %session.progress_message(), "upload progress");
            })
        };

        let name = file.name.clone();
        let entry = FileEntry {
            path: file.name,
            content: file.content,
        };

        let entries = match self.store.add(entry, progress).await {
            Ok(entries) => entries,
            Err(err) => return Err(self.fail_with(err)),
        };

        // CID of the wrapping directory is returned last by the store
        let cid = match entries.last() {
            Some(entry) => entry.hash.clone(),
            None => return Err(self.fail_with(ContentStoreError::EmptyResult)),
        };
        self.advance(UploadState::on_stored);
        info!(cid = %cid, "file added to content store");

        let native_url = format!("ipfs://{cid}/{name}");
        let gateway_url = format!(
            "{}/ipfs/{}/{}",
            self.gateway_base.trim_end_matches('/'),
            cid,
            name
        );

        // Awaited so completion is only declared after the gateway saw the
        // URL, but an unreachable gateway must not fail the upload.
        if let Err(err) = self.gateway.ping(&gateway_url).await {
            warn!(error = %err, url = %gateway_url, "gateway reachability check failed");
        }

        self.advance(UploadState::on_verified);
        {
            let mut session = self.session.lock();
            session.result_url = Some(native_url.clone());
            session.result_gateway_url = Some(gateway_url);
        }
        self.loading.store(false, Ordering::SeqCst);

        Ok(native_url)
    }

    fn fail_with(&self, err: ContentStoreError) -> UploadError {
        {
            let mut session = self.session.lock();
            session.state = session.state.fail();
        }
        self.loading.store(false, Ordering::SeqCst);
        warn!(error = %err, "adding to the content store failed");
        err.into()
    }

    fn advance(&self, transition: fn(UploadState) -> Option<UploadState>) {
        let mut session = self.session.lock();
        match transition(session.state) {
            Some(next) => session.state = next,
            None => warn!(state = ?session.state, "upload state transition skipped"),
        }
    }
}
