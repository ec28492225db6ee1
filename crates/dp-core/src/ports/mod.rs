//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The publish flow's external
//! collaborators — the URL-check backend, the content-addressed store,
//! the HTTP gateway, the wallet providers and the parent form listening
//! for list changes — are all reached exclusively through these traits.

mod content_store;
pub mod errors;
mod file_list_sink;
mod gateway;
mod url_check;
mod wallet;

pub use content_store::{AddedEntry, ContentStorePort, FileEntry, ProgressFn};
pub use errors::{ContentStoreError, GatewayError, UrlCheckError};
pub use file_list_sink::FileListSinkPort;
pub use gateway::GatewayPort;
pub use url_check::{UrlCheckPort, UrlCheckResult};
pub use wallet::WalletPort;
