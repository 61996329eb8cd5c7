use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Blockchain, ExposureRow, Platform};

/// Upper bound enforced on every yield assumption at the request boundary.
pub const MAX_YIELD_PCT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Token counts for the four fixed platforms, zero-defaulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCounts {
    pub lofty: u64,
    pub realt: u64,
    pub ondo: u64,
    pub xdc: u64,
}

/// Per-platform yield percentages. Defaults mirror the dashboard's
/// number inputs: 7 / 10 / 5 / 8.
#[derive(Debug, Clone, Copy)]
pub struct YieldAssumptions {
    pub lofty: Decimal,
    pub realt: Decimal,
    pub ondo: Decimal,
    pub xdc: Decimal,
}

impl Default for YieldAssumptions {
    fn default() -> Self {
        Self {
            lofty: Decimal::from(7),
            realt: Decimal::from(10),
            ondo: Decimal::from(5),
            xdc: Decimal::from(8),
        }
    }
}

impl YieldAssumptions {
    /// Clamp every assumption to [0, 20]. The aggregator itself never
    /// clamps; this belongs to the input boundary.
    pub fn clamped(self) -> Self {
        let clamp = |d: Decimal| d.clamp(Decimal::ZERO, MAX_YIELD_PCT);
        Self {
            lofty: clamp(self.lofty),
            realt: clamp(self.realt),
            ondo: clamp(self.ondo),
            xdc: clamp(self.xdc),
        }
    }
}

/// The 4-row exposure table plus its derived aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct ExposureReport {
    pub rows: Vec<ExposureRow>,
    pub by_blockchain: BTreeMap<Blockchain, u64>,
    pub total_annual_yield: Decimal,
}

/// Pure arithmetic over fixed-shape input: always four rows in platform
/// order {Lofty, RealT, ONDO, XDC}, a tokens-held sum keyed by
/// blockchain, and the scalar total annual yield.
pub fn build_report(counts: &TokenCounts, yields: &YieldAssumptions) -> ExposureReport {
    let rows = vec![
        ExposureRow::new(Platform::Lofty, counts.lofty, yields.lofty),
        ExposureRow::new(Platform::RealT, counts.realt, yields.realt),
        ExposureRow::new(Platform::Ondo, counts.ondo, yields.ondo),
        ExposureRow::new(Platform::Xdc, counts.xdc, yields.xdc),
    ];

    let mut by_blockchain = BTreeMap::new();
    for row in &rows {
        *by_blockchain.entry(row.blockchain).or_insert(0u64) += row.tokens_held;
    }

    let total_annual_yield = rows.iter().map(|r| r.annual_yield).sum();

    ExposureReport {
        rows,
        by_blockchain,
        total_annual_yield,
    }
}
