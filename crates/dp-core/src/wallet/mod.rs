//! Wallet provider domain model.
//!
//! The actual login flows live behind [`crate::ports::WalletPort`]; this
//! module only knows which providers exist and how the active one is
//! resolved from the capability flags.

use serde::{Deserialize, Serialize};

/// Wallet providers the publish flow can log in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    /// In-browser throwaway wallet, always available
    Burner,
    /// Injected web3 wallet
    Metamask,
    /// Hosted wallet
    Torus,
}

impl WalletProvider {
    /// MetaMask needs an injected web3 environment; the other providers are
    /// always available.
    pub fn is_available(self, web3_capable: bool) -> bool {
        match self {
            Self::Metamask => web3_capable,
            Self::Burner | Self::Torus => true,
        }
    }

    /// Resolve the active provider from the wallet capability flags.
    ///
    /// Burner wins when its flag is set; otherwise Torus; otherwise the
    /// injected web3 wallet is assumed.
    pub fn from_flags(is_burner: bool, is_torus: bool) -> Self {
        if is_burner {
            Self::Burner
        } else if is_torus {
            Self::Torus
        } else {
            Self::Metamask
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Burner, Self::Metamask, Self::Torus]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metamask_requires_web3() {
        assert!(!WalletProvider::Metamask.is_available(false));
        assert!(WalletProvider::Metamask.is_available(true));
        assert!(WalletProvider::Burner.is_available(false));
        assert!(WalletProvider::Torus.is_available(false));
    }

    #[test]
    fn active_provider_resolution() {
        assert_eq!(WalletProvider::from_flags(true, false), WalletProvider::Burner);
        // burner flag wins even with torus set
        assert_eq!(WalletProvider::from_flags(true, true), WalletProvider::Burner);
        assert_eq!(WalletProvider::from_flags(false, true), WalletProvider::Torus);
        assert_eq!(WalletProvider::from_flags(false, false), WalletProvider::Metamask);
    }
}
