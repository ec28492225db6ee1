//! # dp-core
//!
//! Core domain models and business logic for datapub.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod files;
pub mod ports;
pub mod upload;
pub mod wallet;

// Re-export commonly used types at the crate root
pub use config::ServicesConfig;
pub use files::{Compression, DescriptorId, FileDescriptor, FileListChanged};
pub use upload::{UploadError, UploadSession, UploadState};
pub use wallet::WalletProvider;
