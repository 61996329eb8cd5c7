use std::collections::HashSet;

use metrics::counter;
use serde::Serialize;

use super::aggregator::TokenCounts;
use crate::explorers::{ExplorerError, Explorers};

/// Contract-address markers for the two Ethereum token subsets.
const REALT_MARKER: &str = "realt";
const ONDO_MARKER: &str = "ondo";

/// How a chain's fetch went. `Ok` covers a legitimately zero count;
/// everything else means the count was defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    Ok,
    EmptyInput,
    NetworkError,
    ParseError,
}

impl From<&ExplorerError> for FetchStatus {
    fn from(err: &ExplorerError) -> Self {
        match err {
            ExplorerError::Network(_) => FetchStatus::NetworkError,
            ExplorerError::Parse(_) => FetchStatus::ParseError,
            ExplorerError::EmptyInput => FetchStatus::EmptyInput,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChainStatus {
    pub algorand: FetchStatus,
    pub ethereum: FetchStatus,
    pub xdc: FetchStatus,
}

#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub counts: TokenCounts,
    pub status: ChainStatus,
}

/// Best-effort fetch of all platform token counts. Each chain is fetched
/// independently; a failure defaults that chain's counts to zero and is
/// recorded in the per-chain status, so the caller always gets a full set
/// of counts and the table keeps its four rows.
pub async fn fetch_token_counts(
    explorers: &Explorers,
    algorand_address: &str,
    ethereum_address: &str,
    xdc_address: &str,
) -> FetchOutcome {
    let mut counts = TokenCounts::default();

    let algorand = match explorers.algorand.asset_count(algorand_address).await {
        Ok(n) => {
            counts.lofty = n;
            FetchStatus::Ok
        }
        Err(e) => fetch_failed("algorand", &e),
    };

    // RealT and ONDO are both derived from the one contract-set fetch.
    let ethereum = match explorers.ethereum.token_contracts(ethereum_address).await {
        Ok(contracts) => {
            counts.realt = count_matching_contracts(&contracts, REALT_MARKER);
            counts.ondo = count_matching_contracts(&contracts, ONDO_MARKER);
            FetchStatus::Ok
        }
        Err(e) => fetch_failed("ethereum", &e),
    };

    let xdc = match explorers.xdc.token_contract_count(xdc_address).await {
        Ok(n) => {
            counts.xdc = n;
            FetchStatus::Ok
        }
        Err(e) => fetch_failed("xdc", &e),
    };

    FetchOutcome {
        counts,
        status: ChainStatus {
            algorand,
            ethereum,
            xdc,
        },
    }
}

/// Contracts whose address contains the marker, case-insensitively.
pub fn count_matching_contracts(contracts: &HashSet<String>, marker: &str) -> u64 {
    let marker = marker.to_ascii_lowercase();
    contracts
        .iter()
        .filter(|c| c.to_ascii_lowercase().contains(&marker))
        .count() as u64
}

fn fetch_failed(chain: &'static str, err: &ExplorerError) -> FetchStatus {
    let status = FetchStatus::from(err);
    // An empty form field is normal, not a failure worth logging.
    if status != FetchStatus::EmptyInput {
        tracing::warn!(chain, error = %err, "explorer fetch failed; defaulting to zero");
        counter!("explorer_fetch_failures_total", "chain" => chain).increment(1);
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exposure::aggregator::{build_report, YieldAssumptions};

    fn contract_set(addrs: &[&str]) -> HashSet<String> {
        addrs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_derived_counts_case_insensitive() {
        let contracts = contract_set(&["0xRealtA", "0xONDOb", "0xOther"]);
        assert_eq!(count_matching_contracts(&contracts, REALT_MARKER), 1);
        assert_eq!(count_matching_contracts(&contracts, ONDO_MARKER), 1);
    }

    #[test]
    fn test_derived_counts_no_matches() {
        let contracts = contract_set(&["0xaaa", "0xbbb"]);
        assert_eq!(count_matching_contracts(&contracts, REALT_MARKER), 0);
    }

    #[test]
    fn test_derived_counts_empty_set() {
        assert_eq!(count_matching_contracts(&HashSet::new(), ONDO_MARKER), 0);
    }

    #[test]
    fn test_status_from_error_kinds() {
        assert_eq!(
            FetchStatus::from(&ExplorerError::Parse("bad".into())),
            FetchStatus::ParseError
        );
        assert_eq!(
            FetchStatus::from(&ExplorerError::EmptyInput),
            FetchStatus::EmptyInput
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_defaults_to_zero_and_keeps_four_rows() {
        // Nothing listens on the discard port, so every fetch fails fast.
        let explorers = Explorers::with_base_url(reqwest::Client::new(), "http://127.0.0.1:9");

        let outcome = fetch_token_counts(&explorers, "ALGOADDR", "0xabc", "xdc123").await;
        assert_eq!(outcome.status.algorand, FetchStatus::NetworkError);
        assert_eq!(outcome.status.ethereum, FetchStatus::NetworkError);
        assert_eq!(outcome.status.xdc, FetchStatus::NetworkError);
        assert_eq!(outcome.counts.lofty, 0);
        assert_eq!(outcome.counts.xdc, 0);

        let report = build_report(&outcome.counts, &YieldAssumptions::default());
        assert_eq!(report.rows.len(), 4);
    }

    #[tokio::test]
    async fn test_empty_addresses_make_no_requests() {
        let explorers = Explorers::with_base_url(reqwest::Client::new(), "http://127.0.0.1:9");

        let outcome = fetch_token_counts(&explorers, "", "  ", "").await;
        assert_eq!(outcome.status.algorand, FetchStatus::EmptyInput);
        assert_eq!(outcome.status.ethereum, FetchStatus::EmptyInput);
        assert_eq!(outcome.status.xdc, FetchStatus::EmptyInput);
        assert_eq!(outcome.counts.realt, 0);
        assert_eq!(outcome.counts.ondo, 0);
    }
}
