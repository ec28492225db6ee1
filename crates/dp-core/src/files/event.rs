use serde::{Deserialize, Serialize};

use super::FileDescriptor;

/// Field name the parent publish form listens on.
pub const FILES_FIELD: &str = "files";

/// Emitted after every list mutation.
///
/// Value semantics: carries a full fresh copy of the collection, not a
/// mutation signal, so downstream consumers re-render by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListChanged {
    pub name: String,
    pub files: Vec<FileDescriptor>,
}

impl FileListChanged {
    pub fn new(files: Vec<FileDescriptor>) -> Self {
        Self {
            name: FILES_FIELD.to_string(),
            files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_carries_field_name_and_snapshot() {
        let change = FileListChanged::new(vec![FileDescriptor::new("ipfs://bafy/doc")]);
        assert_eq!(change.name, FILES_FIELD);
        assert_eq!(change.files.len(), 1);
    }
}
