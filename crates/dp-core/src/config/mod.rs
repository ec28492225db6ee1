//! Service endpoint configuration domain model

use serde::{Deserialize, Serialize};

/// Endpoints of the external collaborators used by the publish flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub url_check: UrlCheckConfig,
    pub ipfs: IpfsConfig,
}

/// URL-check backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlCheckConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl UrlCheckConfig {
    pub fn endpoint(&self) -> String {
        format!(
            "{}://{}:{}/api/v1/urlcheck",
            self.scheme, self.host, self.port
        )
    }
}

impl Default for UrlCheckConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 4000,
        }
    }
}

/// IPFS HTTP API node and gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IpfsConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,

    /// HTTP gateway base, only used for the pre-completion reachability ping.
    pub gateway_uri: String,
}

impl IpfsConfig {
    pub fn api_base(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

impl Default for IpfsConfig {
    fn default() -> Self {
        Self {
            protocol: "https".to_string(),
            host: "ipfs.infura.io".to_string(),
            port: 5001,
            gateway_uri: "https://gateway.ipfs.io".to_string(),
        }
    }
}
