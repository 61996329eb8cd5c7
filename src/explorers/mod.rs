pub mod algorand;
pub mod etherscan;
pub mod xdcscan;

mod types;

pub use algorand::AlgoExplorerClient;
pub use etherscan::EtherscanClient;
pub use xdcscan::XdcScanClient;

use reqwest::Client;
use thiserror::Error;

use crate::config::AppConfig;

/// Failure modes a fetch can surface, so callers can tell a legitimately
/// empty wallet apart from a fetch that went wrong.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("empty wallet address")]
    EmptyInput,
}

/// The three chain explorer clients, sharing one HTTP client.
#[derive(Debug, Clone)]
pub struct Explorers {
    pub algorand: AlgoExplorerClient,
    pub ethereum: EtherscanClient,
    pub xdc: XdcScanClient,
}

impl Explorers {
    pub fn new(http: Client, config: &AppConfig) -> Self {
        Self {
            algorand: AlgoExplorerClient::new(http.clone()),
            ethereum: EtherscanClient::new(http.clone(), config.etherscan_api_key.clone()),
            xdc: XdcScanClient::new(http, config.xdc_api_key.clone()),
        }
    }

    /// Point all three clients at one base URL. Test-oriented.
    pub fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            algorand: AlgoExplorerClient::with_base_url(http.clone(), base_url),
            ethereum: EtherscanClient::with_base_url(http.clone(), base_url, None),
            xdc: XdcScanClient::with_base_url(http, base_url, None),
        }
    }
}
