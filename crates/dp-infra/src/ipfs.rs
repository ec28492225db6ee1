use std::io;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use log::{debug, info};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use serde::Deserialize;

use dp_core::config::IpfsConfig;
use dp_core::ports::{AddedEntry, ContentStoreError, ContentStorePort, FileEntry, ProgressFn};

/// Directory wrapping is what makes the filename part of the final path,
/// and what makes the directory CID come back as the last response entry.
const ADD_PATH: &str = "/api/v0/add?wrap-with-directory=true";

const UPLOAD_CHUNK_BYTES: usize = 64 * 1024;

// Adds of large files can legitimately take a while; this bounds a stuck
// connection, not a slow one.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// One NDJSON line of the add response.
#[derive(Debug, Deserialize)]
struct AddResponseLine {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Hash")]
    hash: String,
    #[serde(rename = "Size", default)]
    size: Option<String>,
}

/// IPFS HTTP API client implementing the content store port.
pub struct IpfsApiClient {
    client: Client,
    api_base: String,
}

impl IpfsApiClient {
    pub fn new(config: &IpfsConfig) -> Self {
        Self::with_api_base(config.api_base())
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_base: api_base.into(),
        }
    }
}

/// Request body that reports cumulative bytes to `progress` as the HTTP
/// client pulls chunks off it. This is where byte-level upload progress
/// comes from.
fn counting_body(content: Bytes, progress: ProgressFn) -> Body {
    // zero-copy slices of the same backing buffer
    let chunks: Vec<Bytes> = (0..content.len())
        .step_by(UPLOAD_CHUNK_BYTES)
        .map(|start| content.slice(start..content.len().min(start + UPLOAD_CHUNK_BYTES)))
        .collect();

    let mut sent: u64 = 0;
    let counted = chunks.into_iter().map(move |chunk| {
        sent += chunk.len() as u64;
        progress(sent);
        Ok::<Bytes, io::Error>(chunk)
    });

    Body::wrap_stream(stream::iter(counted))
}

#[async_trait]
impl ContentStorePort for IpfsApiClient {
    async fn add(
        &self,
        file: FileEntry,
        progress: ProgressFn,
    ) -> Result<Vec<AddedEntry>, ContentStoreError> {
        let url = format!("{}{}", self.api_base, ADD_PATH);
        let total = file.content.len() as u64;
        debug!("adding {} ({} bytes) to {}", file.path, total, url);

        let body = counting_body(file.content, progress);
        let part = Part::stream_with_length(body, total).file_name(file.path);
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ContentStoreError::Store(err.to_string()))?
            .error_for_status()
            .map_err(|err| ContentStoreError::Store(err.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|err| ContentStoreError::Store(err.to_string()))?;

        let mut entries = Vec::new();
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            let line: AddResponseLine = serde_json::from_str(line)
                .map_err(|err| ContentStoreError::Store(format!("bad add response: {err}")))?;
            entries.push(AddedEntry {
                name: line.name,
                hash: line.hash,
                size: line.size,
            });
        }

        let directory = entries.last().ok_or(ContentStoreError::EmptyResult)?;
        info!(
            "added {} entries, directory cid {}",
            entries.len(),
            directory.hash
        );
        Ok(entries)
    }
}
