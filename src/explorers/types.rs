//! Shared response shapes for etherscan-style scan APIs.

use serde::Deserialize;

use super::ExplorerError;

/// Envelope returned by etherscan-compatible explorers. On success,
/// `result` is an array of transfers; on error it degrades to a plain
/// string, which we surface as a parse failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ScanResponse {
    #[serde(default)]
    pub result: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenTransfer {
    #[serde(rename = "contractAddress")]
    pub contract_address: String,
}

impl ScanResponse {
    pub fn token_transfers(self) -> Result<Vec<TokenTransfer>, ExplorerError> {
        serde_json::from_value(self.result).map_err(|e| ExplorerError::Parse(e.to_string()))
    }
}
