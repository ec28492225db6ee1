use serde::{Deserialize, Serialize};

/// Archive/compression classification derived from a reported MIME type.
///
/// The backend reports a content type for every checked URL; the publish
/// form only cares whether it is one of the known archive formats. The
/// serialized form matches the suffix of the matching MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compression {
    #[serde(rename = "zip")]
    Zip,
    #[serde(rename = "gzip")]
    Gzip,
    #[serde(rename = "x-lzma")]
    Lzma,
    #[serde(rename = "x-xz")]
    Xz,
    #[serde(rename = "x-tar")]
    Tar,
    #[serde(rename = "x-bzip2")]
    Bzip2,
    #[serde(rename = "7z-compressed")]
    SevenZip,
    #[serde(rename = "none")]
    None,
}

impl Compression {
    /// Exact match against the known archive MIME types; anything else,
    /// including parameterized variants like `application/zip; charset=…`,
    /// classifies as `None`.
    pub fn classify(content_type: &str) -> Self {
        match content_type {
            "application/zip" => Self::Zip,
            "application/gzip" => Self::Gzip,
            "application/x-lzma" => Self::Lzma,
            "application/x-xz" => Self::Xz,
            "application/x-tar" => Self::Tar,
            "application/x-bzip2" => Self::Bzip2,
            "application/x-7z-compressed" => Self::SevenZip,
            _ => Self::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Gzip => "gzip",
            Self::Lzma => "x-lzma",
            Self::Xz => "x-xz",
            Self::Tar => "x-tar",
            Self::Bzip2 => "x-bzip2",
            Self::SevenZip => "7z-compressed",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_all_known_archive_mime_types() {
        let cases = [
            ("application/zip", Compression::Zip),
            ("application/gzip", Compression::Gzip),
            ("application/x-lzma", Compression::Lzma),
            ("application/x-xz", Compression::Xz),
            ("application/x-tar", Compression::Tar),
            ("application/x-bzip2", Compression::Bzip2),
            ("application/x-7z-compressed", Compression::SevenZip),
        ];
        for (mime, expected) in cases {
            assert_eq!(Compression::classify(mime), expected, "mime: {mime}");
        }
    }

    #[test]
    fn everything_else_is_none() {
        assert_eq!(Compression::classify("text/plain"), Compression::None);
        assert_eq!(Compression::classify("application/json"), Compression::None);
        assert_eq!(Compression::classify(""), Compression::None);
        // Only exact matches count
        assert_eq!(
            Compression::classify("application/zip; charset=utf-8"),
            Compression::None
        );
    }

    #[test]
    fn serializes_as_mime_suffix() {
        assert_eq!(
            serde_json::to_string(&Compression::SevenZip).unwrap(),
            "\"7z-compressed\""
        );
        assert_eq!(serde_json::to_string(&Compression::None).unwrap(), "\"none\"");
    }
}
