pub mod exposure;
pub mod holding;

pub use exposure::ExposureRow;
pub use holding::PortfolioHolding;

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Blockchain
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Blockchain {
    Algorand,
    Ethereum,
    #[serde(rename = "XDC")]
    Xdc,
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blockchain::Algorand => write!(f, "Algorand"),
            Blockchain::Ethereum => write!(f, "Ethereum"),
            Blockchain::Xdc => write!(f, "XDC"),
        }
    }
}

// ---------------------------------------------------------------------------
// Platform — the four fixed exposure rows, in display order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Lofty,
    RealT,
    #[serde(rename = "ONDO")]
    Ondo,
    #[serde(rename = "XDC")]
    Xdc,
}

impl Platform {
    /// The chain each platform's tokens live on. Both RealT and ONDO are
    /// Ethereum token subsets derived from a single contract fetch.
    pub fn blockchain(&self) -> Blockchain {
        match self {
            Platform::Lofty => Blockchain::Algorand,
            Platform::RealT | Platform::Ondo => Blockchain::Ethereum,
            Platform::Xdc => Blockchain::Xdc,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Lofty => write!(f, "Lofty"),
            Platform::RealT => write!(f, "RealT"),
            Platform::Ondo => write!(f, "ONDO"),
            Platform::Xdc => write!(f, "XDC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_chain_mapping() {
        assert_eq!(Platform::Lofty.blockchain(), Blockchain::Algorand);
        assert_eq!(Platform::RealT.blockchain(), Blockchain::Ethereum);
        assert_eq!(Platform::Ondo.blockchain(), Blockchain::Ethereum);
        assert_eq!(Platform::Xdc.blockchain(), Blockchain::Xdc);
    }

    #[test]
    fn test_display_matches_sheet_labels() {
        assert_eq!(Platform::Ondo.to_string(), "ONDO");
        assert_eq!(Blockchain::Xdc.to_string(), "XDC");
    }
}
