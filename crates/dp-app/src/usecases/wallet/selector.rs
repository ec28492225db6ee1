use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::info;

use dp_core::ports::WalletPort;
use dp_core::wallet::WalletProvider;

/// Wallet-selection flow: modal visibility plus provider login over the
/// injected wallet capability.
pub struct WalletSelector {
    wallet: Arc<dyn WalletPort>,
    web3_capable: bool,
    modal_open: AtomicBool,
}

impl WalletSelector {
    pub fn new(wallet: Arc<dyn WalletPort>, web3_capable: bool) -> Self {
        Self {
            wallet,
            web3_capable,
            modal_open: AtomicBool::new(false),
        }
    }

    /// Open or close the selection modal. Returns the new visibility.
    pub fn toggle_modal(&self) -> bool {
        !self.modal_open.fetch_xor(true, Ordering::SeqCst)
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open.load(Ordering::SeqCst)
    }

    /// Providers that can be offered in this environment.
    pub fn available_providers(&self) -> Vec<WalletProvider> {
        WalletProvider::all()
            .into_iter()
            .filter(|provider| provider.is_available(self.web3_capable))
            .collect()
    }

    /// Provider the wallet currently reports as active.
    pub fn active_provider(&self) -> WalletProvider {
        WalletProvider::from_flags(self.wallet.is_burner(), self.wallet.is_torus())
    }

    /// Log in with `provider` and close the modal.
    ///
    /// MetaMask and Torus also log the burner wallet out so only one
    /// provider stays active.
    pub async fn select(&self, provider: WalletProvider) -> Result<()> {
        if !provider.is_available(self.web3_capable) {
            bail!("MetaMask is unavailable without a web3-capable environment");
        }

        match provider {
            WalletProvider::Burner => self.wallet.login_burner_wallet().await?,
            WalletProvider::Metamask => {
                self.wallet.login_metamask().await?;
                self.wallet.logout_burner_wallet().await?;
            }
            WalletProvider::Torus => {
                self.wallet.login_torus().await?;
                self.wallet.logout_burner_wallet().await?;
            }
        }

        self.modal_open.store(false, Ordering::SeqCst);
        info!(provider = ?provider, "wallet provider selected");
        Ok(())
    }
}
