use serde::{Deserialize, Serialize};

/// Upload state machine
///
/// Design principle: This is a pure type state machine with only state
/// definitions and transition validation logic. Runtime behaviors like
/// driving the store and the gateway ping are handled by the application
/// layer (dp-app).
///
/// State transitions:
///
/// ```text
/// Idle
///  │
///  └─→ Uploading ──→ Verifying ──→ Completed
///                 └─→ Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadState {
    /// No upload in progress
    Idle,

    /// Streaming the file to the content-addressed store
    Uploading,

    /// Store accepted the file; checking the gateway URL before completion
    Verifying,

    /// Upload completed successfully
    Completed,

    /// Store rejected the upload
    Failed,
}

impl UploadState {
    /// Check if this is a terminal state
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Check if an upload is currently in progress
    pub fn is_active(self) -> bool {
        matches!(self, Self::Uploading | Self::Verifying)
    }

    /// Start streaming to the store
    pub fn start(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Uploading),
            _ => None,
        }
    }

    /// Transition after the store accepted the file
    pub fn on_stored(self) -> Option<Self> {
        match self {
            Self::Uploading => Some(Self::Verifying),
            _ => None,
        }
    }

    /// Transition after the gateway check step finished
    pub fn on_verified(self) -> Option<Self> {
        match self {
            Self::Verifying => Some(Self::Completed),
            _ => None,
        }
    }

    /// Mark as failed
    pub fn fail(self) -> Self {
        if self.is_active() {
            Self::Failed
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_transitions() {
        let state = UploadState::Idle;
        let state = state.start().unwrap();
        assert_eq!(state, UploadState::Uploading);
        let state = state.on_stored().unwrap();
        assert_eq!(state, UploadState::Verifying);
        let state = state.on_verified().unwrap();
        assert_eq!(state, UploadState::Completed);
        assert!(state.is_terminal());
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        assert_eq!(UploadState::Idle.on_stored(), None);
        assert_eq!(UploadState::Idle.on_verified(), None);
        assert_eq!(UploadState::Uploading.start(), None);
        assert_eq!(UploadState::Verifying.start(), None);
        assert_eq!(UploadState::Completed.start(), None);
        assert_eq!(UploadState::Uploading.on_verified(), None);
    }

    #[test]
    fn fail_only_applies_to_active_states() {
        assert_eq!(UploadState::Uploading.fail(), UploadState::Failed);
        assert_eq!(UploadState::Verifying.fail(), UploadState::Failed);
        assert_eq!(UploadState::Idle.fail(), UploadState::Idle);
        assert_eq!(UploadState::Completed.fail(), UploadState::Completed);
    }

    #[test]
    fn active_and_terminal_are_disjoint() {
        for state in [
            UploadState::Idle,
            UploadState::Uploading,
            UploadState::Verifying,
            UploadState::Completed,
            UploadState::Failed,
        ] {
            assert!(!(state.is_active() && state.is_terminal()));
        }
    }
}
