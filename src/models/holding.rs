use rust_decimal::Decimal;
use serde::Serialize;

use super::{ExposureRow, Platform};

/// Fixed "good deal" score assigned to every virtual holding.
pub const DEFAULT_DEAL_SCORE: u8 = 80;

/// A session-scoped, append-only record derived from an exposure row and
/// held for later display alongside real-estate holdings.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioHolding {
    pub address: String,
    pub platform: Platform,
    pub property_value: Decimal,
    pub dcf: Decimal,
    pub irr_pct: Decimal,
    pub cap_rate_pct: Decimal,
    pub score: u8,
}

impl PortfolioHolding {
    /// Derive a virtual holding from an exposure row: the annual yield
    /// stands in for both property value and DCF, the yield assumption
    /// for both IRR and cap rate.
    pub fn from_exposure_row(row: &ExposureRow) -> Self {
        Self {
            address: format!("{} Wallet", row.platform),
            platform: row.platform,
            property_value: row.annual_yield,
            dcf: row.annual_yield,
            irr_pct: row.yield_pct,
            cap_rate_pct: row.yield_pct,
            score: DEFAULT_DEAL_SCORE,
        }
    }
}
