use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Compression;

/// Stable synthetic identity for a file descriptor.
///
/// List removal stays positional (the observable ordering contract), the id
/// only exists so observers can track an entry across index shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescriptorId(Uuid);

impl DescriptorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DescriptorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One file reference within the asset being published.
///
/// `found` stays `false` until the URL-check backend confirms the location;
/// a failed lookup leaves the enrichment fields empty but the descriptor is
/// still recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    pub id: DescriptorId,

    /// Native or gateway-resolved location. Required, never empty.
    pub url: String,

    /// Integrity metadata, carried for the publish form but not populated
    /// by this core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum_type: Option<String>,

    /// Byte size as reported by the URL-check backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_length: Option<String>,

    /// MIME type as reported by the URL-check backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<Compression>,

    /// Whether the remote lookup confirmed the URL is reachable.
    #[serde(default)]
    pub found: bool,

    pub created_at: DateTime<Utc>,
}

impl FileDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: DescriptorId::new(),
            url: url.into(),
            checksum: None,
            checksum_type: None,
            content_length: None,
            content_type: None,
            compression: None,
            found: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_descriptor_is_unfound_and_unenriched() {
        let descriptor = FileDescriptor::new("https://example.com/data.csv");
        assert_eq!(descriptor.url, "https://example.com/data.csv");
        assert!(!descriptor.found);
        assert!(descriptor.content_length.is_none());
        assert!(descriptor.content_type.is_none());
        assert!(descriptor.compression.is_none());
    }

    #[test]
    fn descriptors_get_distinct_ids() {
        let a = FileDescriptor::new("https://example.com/a");
        let b = FileDescriptor::new("https://example.com/a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let mut descriptor = FileDescriptor::new("ipfs://bafy123/doc.txt");
        descriptor.content_length = Some("100".to_string());
        descriptor.content_type = Some("application/zip".to_string());
        descriptor.compression = Some(Compression::Zip);

        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["contentLength"], "100");
        assert_eq!(json["contentType"], "application/zip");
        assert_eq!(json["compression"], "zip");
        assert_eq!(json["found"], false);
        // unset options stay off the wire
        assert!(json.get("checksum").is_none());
    }
}
