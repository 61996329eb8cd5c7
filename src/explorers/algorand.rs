use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;

use super::ExplorerError;

const ALGO_EXPLORER_BASE: &str = "https://algoexplorerapi.io";

// The explorer rejects default library user agents.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Clone)]
pub struct AlgoExplorerClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(default)]
    assets: Vec<serde_json::Value>,
}

impl AlgoExplorerClient {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            base_url: ALGO_EXPLORER_BASE.into(),
        }
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Number of distinct on-chain assets held by an account. No API key.
    pub async fn asset_count(&self, address: &str) -> Result<u64, ExplorerError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ExplorerError::EmptyInput);
        }

        let url = format!("{}/v2/accounts/{}", self.base_url, address);
        let resp = self
            .http
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?
            .error_for_status()?;

        let account: AccountResponse = resp
            .json()
            .await
            .map_err(|e| ExplorerError::Parse(e.to_string()))?;
        Ok(account.assets.len() as u64)
    }
}
