use std::collections::HashSet;

use reqwest::Client;

use super::types::ScanResponse;
use super::ExplorerError;

const XDCSCAN_API_BASE: &str = "https://api.xdcscan.io";

/// Rewrite the human-readable `xdc` address prefix to the `0x` hex form
/// the explorer API expects. Addresses without the prefix pass through.
pub fn normalize_address(address: &str) -> String {
    match address.strip_prefix("xdc") {
        Some(rest) => format!("0x{rest}"),
        None => address.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct XdcScanClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl XdcScanClient {
    pub fn new(http: Client, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: XDCSCAN_API_BASE.into(),
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

    /// Count of distinct token contracts a wallet has transacted with.
    pub async fn token_contract_count(&self, address: &str) -> Result<u64, ExplorerError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ExplorerError::EmptyInput);
        }
        let address = normalize_address(address);

        let url = format!("{}/api", self.base_url);
        let mut query: Vec<(&str, &str)> = vec![
            ("module", "account"),
            ("action", "tokentx"),
            ("address", address.as_str()),
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

        let contracts: HashSet<String> = body
            .token_transfers()?
            .into_iter()
            .map(|t| t.contract_address)
            .collect();
        Ok(contracts.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rewrites_prefix() {
        assert_eq!(normalize_address("xdc1234"), "0x1234");
    }

    #[test]
    fn test_normalize_passes_hex_through() {
        assert_eq!(normalize_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_normalize_only_strips_leading_prefix() {
        // "xdc" later in the string is part of the address body
        assert_eq!(normalize_address("xdcabxdc"), "0xabxdc");
        assert_eq!(normalize_address("abxdc"), "abxdc");
    }
}
