use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use dp_core::ports::{GatewayError, GatewayPort};

const PING_TIMEOUT: Duration = Duration::from_secs(30);

/// Gateway reachability check: a plain GET against the gateway URL.
///
/// Fetching the URL once also warms the gateway's cache for the freshly
/// added content.
pub struct HttpGatewayClient {
    client: Client,
}

impl HttpGatewayClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(PING_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for HttpGatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GatewayPort for HttpGatewayClient {
    async fn ping(&self, url: &str) -> Result<(), GatewayError> {
        debug!("pinging gateway url {url}");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|err| GatewayError::Unreachable(err.to_string()))?
            .error_for_status()
            .map_err(|err| GatewayError::Unreachable(err.to_string()))?;
        Ok(())
    }
}
