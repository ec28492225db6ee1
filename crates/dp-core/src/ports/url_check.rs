use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::UrlCheckError;

/// What the URL-check backend reports for a candidate URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlCheckResult {
    #[serde(default)]
    pub content_length: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub found: bool,
}

#[async_trait]
pub trait UrlCheckPort: Send + Sync {
    /// Ask the backend whether `url` is reachable and what it serves.
    async fn check(&self, url: &str) -> Result<UrlCheckResult, UrlCheckError>;
}
