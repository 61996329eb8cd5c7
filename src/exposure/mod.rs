pub mod aggregator;
pub mod fetcher;

pub use aggregator::{build_report, ExposureReport, TokenCounts, YieldAssumptions};
pub use fetcher::{fetch_token_counts, ChainStatus, FetchOutcome, FetchStatus};
