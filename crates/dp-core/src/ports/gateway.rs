use async_trait::async_trait;

use super::errors::GatewayError;

#[async_trait]
pub trait GatewayPort: Send + Sync {
    /// Reachability check against a gateway URL, used to warm the gateway
    /// before an upload is declared complete.
    async fn ping(&self, url: &str) -> Result<(), GatewayError>;
}
