use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use dp_core::config::ServicesConfig;

/// Load the services configuration from a JSON file.
///
/// Falls back to the built-in defaults when no path is given or the file
/// does not exist; a present but unparsable file is an error, not a
/// silent fallback.
pub async fn load_services_config(path: Option<&Path>) -> Result<ServicesConfig> {
    let Some(path) = path else {
        return Ok(ServicesConfig::default());
    };

    if !fs::try_exists(path).await.unwrap_or(false) {
        return Ok(ServicesConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("read services config failed: {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("parse services config failed: {}", path.display()))?;
    Ok(config)
}
