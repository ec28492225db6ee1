use anyhow::Result;
use async_trait::async_trait;

/// Capability object for the wallet providers.
///
/// Injected into the selector instead of being read from ambient context;
/// the cryptography behind each login is entirely the provider's business.
#[async_trait]
pub trait WalletPort: Send + Sync {
    async fn login_burner_wallet(&self) -> Result<()>;
    async fn login_metamask(&self) -> Result<()>;
    async fn login_torus(&self) -> Result<()>;
    async fn logout_burner_wallet(&self) -> Result<()>;

    /// Whether the burner wallet is the active session.
    fn is_burner(&self) -> bool;

    /// Whether Torus is the active session.
    fn is_torus(&self) -> bool;
}
