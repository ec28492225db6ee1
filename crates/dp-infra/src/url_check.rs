use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use dp_core::config::UrlCheckConfig;
use dp_core::ports::{UrlCheckError, UrlCheckPort, UrlCheckResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct UrlCheckRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct UrlCheckResponse {
    result: UrlCheckResult,
}

/// URL-check backend client: `POST /api/v1/urlcheck` with `{"url": …}`.
pub struct HttpUrlCheckClient {
    client: Client,
    endpoint: String,
}

impl HttpUrlCheckClient {
    pub fn new(config: &UrlCheckConfig) -> Self {
        Self::with_endpoint(config.endpoint())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl UrlCheckPort for HttpUrlCheckClient {
    async fn check(&self, url: &str) -> Result<UrlCheckResult, UrlCheckError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&UrlCheckRequest { url })
            .send()
            .await
            .map_err(|err| UrlCheckError::Transport(err.to_string()))?
            .error_for_status()
            .map_err(|err| UrlCheckError::Transport(err.to_string()))?;

        let body: UrlCheckResponse = response
            .json()
            .await
            .map_err(|err| UrlCheckError::MalformedResponse(err.to_string()))?;

        debug!("url check for {url}: found={}", body.result.found);
        Ok(body.result)
    }
}
