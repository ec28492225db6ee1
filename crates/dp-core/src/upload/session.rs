use serde::{Deserialize, Serialize};

use super::{format_bytes, UploadState};

/// Progress bookkeeping for one directory-wrapped file upload.
///
/// Ephemeral: the mediator replaces the session when a new upload begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSession {
    pub total_bytes: u64,
    pub bytes_transferred: u64,
    pub state: UploadState,

    /// Native scheme URL (`ipfs://…`), the canonical stored value.
    pub result_url: Option<String>,

    /// HTTP gateway URL, only used for the pre-completion reachability check.
    pub result_gateway_url: Option<String>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self {
            total_bytes: 0,
            bytes_transferred: 0,
            state: UploadState::Idle,
            result_url: None,
            result_gateway_url: None,
        }
    }

    /// Session for an upload that is starting now.
    pub fn begin(total_bytes: u64) -> Self {
        Self {
            total_bytes,
            state: UploadState::Uploading,
            ..Self::new()
        }
    }

    /// Apply a cumulative progress tick from the store driver.
    ///
    /// The driver is expected to report monotonically non-decreasing byte
    /// counts but nothing enforces that on its side, so regressive ticks are
    /// clamped here. Ticks arriving outside `Uploading` are ignored.
    pub fn record_progress(&mut self, bytes_so_far: u64) {
        if self.state != UploadState::Uploading {
            return;
        }
        self.bytes_transferred = self.bytes_transferred.max(bytes_so_far);
    }

    /// Human-readable progress line, recomputed on every tick.
    pub fn progress_message(&self) -> String {
        format!(
            "Adding to IPFS {}/{}",
            format_bytes(self.bytes_transferred, 0),
            format_bytes(self.total_bytes, 0)
        )
    }
}

impl Default for UploadSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regressive_ticks_are_clamped() {
        let mut session = UploadSession::begin(100);
        session.record_progress(10);
        assert_eq!(session.bytes_transferred, 10);
        session.record_progress(5);
        assert_eq!(session.bytes_transferred, 10);
        session.record_progress(60);
        assert_eq!(session.bytes_transferred, 60);
    }

    #[test]
    fn ticks_outside_uploading_are_ignored() {
        let mut session = UploadSession::new();
        session.record_progress(42);
        assert_eq!(session.bytes_transferred, 0);

        let mut session = UploadSession::begin(100);
        session.record_progress(50);
        session.state = session.state.on_stored().unwrap();
        session.record_progress(100);
        assert_eq!(session.bytes_transferred, 50);
    }

    #[test]
    fn progress_message_tracks_both_sides() {
        let mut session = UploadSession::begin(100);
        assert_eq!(session.progress_message(), "Adding to IPFS 0 B/100 B");
        session.record_progress(100);
        assert_eq!(session.progress_message(), "Adding to IPFS 100 B/100 B");
    }
}
