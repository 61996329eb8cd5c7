use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{SheetError, SheetSink};

/// In-memory sheet used when no Google Sheets backend is configured, and
/// by the test suite.
#[derive(Debug, Default)]
pub struct MemorySheet {
    rows: Mutex<Vec<Vec<String>>>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn row_count(&self) -> usize {
        self.rows.lock().await.len()
    }
}

#[async_trait]
impl SheetSink for MemorySheet {
    async fn read_all(&self) -> Result<Vec<Vec<String>>, SheetError> {
        Ok(self.rows.lock().await.clone())
    }

    async fn replace_all(&self, rows: Vec<Vec<String>>) -> Result<(), SheetError> {
        *self.rows.lock().await = rows;
        Ok(())
    }
}
