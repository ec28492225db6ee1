//! File descriptor domain: the ordered collection of file references
//! attached to the asset being published.

mod compression;
mod descriptor;
mod event;

pub use compression::Compression;
pub use descriptor::{DescriptorId, FileDescriptor};
pub use event::{FileListChanged, FILES_FIELD};
