use std::collections::HashSet;

use reqwest::Client;

use super::types::ScanResponse;
use super::ExplorerError;

const ETHERSCAN_API_BASE: &str = "https://api.etherscan.io";

#[derive(Debug, Clone)]
pub struct EtherscanClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl EtherscanClient {
    pub fn new(http: Client, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: ETHERSCAN_API_BASE.into(),
            api_key,
        }
    }

    pub fn with_base_url(
        http: Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// The set of distinct token contract addresses a wallet has ever
    /// transacted with. One call feeds every Ethereum-derived count.
    pub async fn token_contracts(&self, address: &str) -> Result<HashSet<String>, ExplorerError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ExplorerError::EmptyInput);
        }

        let url = format!("{}/api", self.base_url);
        let mut query: Vec<(&str, &str)> = vec![
            ("module", "account"),
            ("action", "tokentx"),
            ("address", address),
            ("sort", "asc"),
        ];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("apikey", key));
        }

        let resp = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let body: ScanResponse = resp
            .json()
            .await
            .map_err(|e| ExplorerError::Parse(e.to_string()))?;

        Ok(body
            .token_transfers()?
            .into_iter()
            .map(|t| t.contract_address)
            .collect())
    }
}
