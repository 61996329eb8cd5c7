pub mod google;
pub mod memory;

pub use google::GoogleSheetsClient;
pub use memory::MemorySheet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::ExposureRow;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// Whole-table spreadsheet access. Implementations only need to read all
/// rows and rewrite all rows; the append logic lives in
/// [`append_exposure`].
#[async_trait]
pub trait SheetSink: Send + Sync {
    async fn read_all(&self) -> Result<Vec<Vec<String>>, SheetError>;
    async fn replace_all(&self, rows: Vec<Vec<String>>) -> Result<(), SheetError>;
}

pub const SHEET_HEADER: [&str; 7] = [
    "Timestamp",
    "Email",
    "Platform",
    "Blockchain",
    "Tokens Held",
    "Yield (%)",
    "Annual Yield ($)",
];

/// Append the exposure table to the shared sheet, prepending the save
/// timestamp and the authenticated user's email to every row.
///
/// This is a read-modify-write of the whole table, not an incremental
/// append. It is not atomic: two sessions saving at the same time can
/// lose rows. Single-writer per deployment is assumed.
pub async fn append_exposure(
    sink: &dyn SheetSink,
    email: &str,
    recorded_at: DateTime<Utc>,
    rows: &[ExposureRow],
) -> Result<(), SheetError> {
    let mut all = sink.read_all().await?;
    if all.is_empty() {
        all.push(SHEET_HEADER.iter().map(|s| s.to_string()).collect());
    }

    for row in rows {
        all.push(vec![
            recorded_at.to_rfc3339(),
            email.to_string(),
            row.platform.to_string(),
            row.blockchain.to_string(),
            row.tokens_held.to_string(),
            row.yield_pct.to_string(),
            row.annual_yield.to_string(),
        ]);
    }

    sink.replace_all(all).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exposure::{build_report, TokenCounts, YieldAssumptions};

    fn sample_rows() -> Vec<ExposureRow> {
        let counts = TokenCounts {
            lofty: 3,
            realt: 1,
            ondo: 0,
            xdc: 2,
        };
        build_report(&counts, &YieldAssumptions::default()).rows
    }

    #[tokio::test]
    async fn test_append_writes_header_then_rows() {
        let sheet = MemorySheet::new();
        append_exposure(&sheet, "admin@example.com", Utc::now(), &sample_rows())
            .await
            .unwrap();

        let all = sheet.read_all().await.unwrap();
        assert_eq!(all.len(), 5); // header + 4 rows
        assert_eq!(all[0][0], "Timestamp");
        assert_eq!(all[1][1], "admin@example.com");
        assert_eq!(all[1][2], "Lofty");
        assert_eq!(all[1][3], "Algorand");
        assert_eq!(all[1][4], "3");
    }

    #[tokio::test]
    async fn test_second_save_appends_after_existing() {
        let sheet = MemorySheet::new();
        let rows = sample_rows();
        append_exposure(&sheet, "admin@example.com", Utc::now(), &rows)
            .await
            .unwrap();
        append_exposure(&sheet, "admin@example.com", Utc::now(), &rows)
            .await
            .unwrap();

        let all = sheet.read_all().await.unwrap();
        assert_eq!(all.len(), 9); // one header + 2×4 rows
        // Header is not duplicated
        assert_eq!(all.iter().filter(|r| r[0] == "Timestamp").count(), 1);
    }
}
