//! # datapub
//!
//! Headless core of a data-asset publishing workflow: a file-list manager
//! with remote URL enrichment, an IPFS upload mediator with byte-level
//! progress, and a wallet-provider selector.
//!
//! This crate is the composition shell: it wires the reqwest adapters from
//! dp-infra into the dp-app use cases. Consumers embed a [`Publisher`] and
//! inject the two collaborators the library cannot provide itself — the
//! parent form listening for list changes and the wallet capability.

use std::sync::Arc;

use anyhow::Result;

use dp_app::{FileListManager, UploadMediator, WalletSelector};
use dp_core::config::ServicesConfig;
use dp_core::ports::{ContentStorePort, FileListSinkPort, GatewayPort, UrlCheckPort, WalletPort};
use dp_infra::{HttpGatewayClient, HttpUrlCheckClient, IpfsApiClient};

pub use dp_app::FileUpload;
pub use dp_core::config;
pub use dp_core::files::{Compression, DescriptorId, FileDescriptor, FileListChanged};
pub use dp_core::upload::{UploadError, UploadSession, UploadState};
pub use dp_core::wallet::WalletProvider;
pub use dp_core::{ports, ServicesConfig as Config};
pub use dp_infra::load_services_config;

/// Infrastructure-facing collaborators of a [`Publisher`].
///
/// [`Publisher::new`] fills these with the reqwest adapters; tests and
/// embedders with custom transports use [`Publisher::with_ports`].
pub struct PublisherPorts {
    pub url_check: Arc<dyn UrlCheckPort>,
    pub content_store: Arc<dyn ContentStorePort>,
    pub gateway: Arc<dyn GatewayPort>,
}

impl PublisherPorts {
    fn from_config(config: &ServicesConfig) -> Self {
        Self {
            url_check: Arc::new(HttpUrlCheckClient::new(&config.url_check)),
            content_store: Arc::new(IpfsApiClient::new(&config.ipfs)),
            gateway: Arc::new(HttpGatewayClient::new()),
        }
    }
}

/// The assembled publish flow.
pub struct Publisher {
    file_list: FileListManager,
    uploader: UploadMediator,
    wallet: WalletSelector,
}

impl Publisher {
    pub fn new(
        config: &ServicesConfig,
        sink: Arc<dyn FileListSinkPort>,
        wallet: Arc<dyn WalletPort>,
        web3_capable: bool,
    ) -> Self {
        let ports = PublisherPorts::from_config(config);
        Self::with_ports(config, ports, sink, wallet, web3_capable)
    }

    pub fn with_ports(
        config: &ServicesConfig,
        ports: PublisherPorts,
        sink: Arc<dyn FileListSinkPort>,
        wallet: Arc<dyn WalletPort>,
        web3_capable: bool,
    ) -> Self {
        Self {
            file_list: FileListManager::new(ports.url_check, sink),
            uploader: UploadMediator::new(
                ports.content_store,
                ports.gateway,
                config.ipfs.gateway_uri.clone(),
            ),
            wallet: WalletSelector::new(wallet, web3_capable),
        }
    }

    pub fn file_list(&self) -> &FileListManager {
        &self.file_list
    }

    pub fn uploader(&self) -> &UploadMediator {
        &self.uploader
    }

    pub fn wallet(&self) -> &WalletSelector {
        &self.wallet
    }

    /// Upload to the content store, then record the resulting native URL in
    /// the file list.
    ///
    /// The list add runs the usual URL check; an `ipfs://` URL the backend
    /// cannot resolve simply lands with `found = false` (the lenient add
    /// policy), so a completed upload is never lost.
    pub async fn upload_and_attach(&self, file: FileUpload) -> Result<String> {
        let url = self.uploader.upload(file).await?;
        self.file_list.add(&url).await?;
        Ok(url)
    }
}
