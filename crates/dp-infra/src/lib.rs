//! datapub infrastructure layer
//!
//! reqwest-backed adapters for the dp-core ports plus configuration
//! loading. Everything that talks to the network lives here.

pub mod config_loader;
pub mod gateway;
pub mod ipfs;
pub mod url_check;

pub use config_loader::load_services_config;
pub use gateway::HttpGatewayClient;
pub use ipfs::IpfsApiClient;
pub use url_check::HttpUrlCheckClient;
