//! datapub application orchestration layer
//!
//! Use cases driving the publish flow over the port traits defined in
//! dp-core. No transport code lives here.

pub mod usecases;

pub use usecases::files::FileListManager;
pub use usecases::upload::{FileUpload, UploadMediator};
pub use usecases::wallet::WalletSelector;
