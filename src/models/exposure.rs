use rust_decimal::Decimal;
use serde::Serialize;

use super::{Blockchain, Platform};

/// One platform's token count and yield assumption.
#[derive(Debug, Clone, Serialize)]
pub struct ExposureRow {
    pub platform: Platform,
    pub blockchain: Blockchain,
    pub tokens_held: u64,
    pub yield_pct: Decimal,
    pub annual_yield: Decimal,
}

impl ExposureRow {
    /// Annual yield is a simple linear projection:
    /// tokens held × yield percentage × 0.01, with no compounding.
    pub fn new(platform: Platform, tokens_held: u64, yield_pct: Decimal) -> Self {
        let annual_yield = Decimal::from(tokens_held) * yield_pct * Decimal::new(1, 2);
        Self {
            platform,
            blockchain: platform.blockchain(),
            tokens_held,
            yield_pct,
            annual_yield,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_yield_formula_exact() {
        let row = ExposureRow::new(Platform::RealT, 50, Decimal::from(10));
        // 50 × 10 × 0.01 = 5, exactly
        assert_eq!(row.annual_yield, Decimal::new(500, 2));
    }

    #[test]
    fn test_zero_tokens_zero_yield() {
        let row = ExposureRow::new(Platform::Lofty, 0, Decimal::from(20));
        assert_eq!(row.annual_yield, Decimal::ZERO);
    }

    #[test]
    fn test_blockchain_derived_from_platform() {
        let row = ExposureRow::new(Platform::Ondo, 3, Decimal::from(5));
        assert_eq!(row.blockchain, Blockchain::Ethereum);
    }
}
