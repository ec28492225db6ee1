//! Upload domain: the per-file upload session and its state machine.

mod bytes;
mod error;
mod session;
mod state;

pub use self::bytes::format_bytes;
pub use error::UploadError;
pub use session::UploadSession;
pub use state::UploadState;
