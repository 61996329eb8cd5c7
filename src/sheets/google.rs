use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{SheetError, SheetSink};
use crate::config::AppConfig;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Google Sheets v4 values API, scoped to one worksheet of one
/// spreadsheet. Authenticated with a bearer token from the environment.
#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    http: Client,
    base_url: String,
    spreadsheet_id: String,
    worksheet: String,
    api_token: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl GoogleSheetsClient {
    /// Returns `None` unless both the spreadsheet id and the API token
    /// are configured.
    pub fn from_config(http: Client, config: &AppConfig) -> Option<Self> {
        Some(Self {
            http,
            base_url: SHEETS_API_BASE.into(),
            spreadsheet_id: config.gsheet_spreadsheet_id.clone()?,
            worksheet: config.gsheet_worksheet.clone(),
            api_token: config.gsheet_api_token.clone()?,
        })
    }

    fn values_url(&self) -> String {
        // Worksheet names are free text and may carry spaces or `!`.
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url,
            self.spreadsheet_id,
            urlencoding::encode(&self.worksheet)
        )
    }
}

#[async_trait]
impl SheetSink for GoogleSheetsClient {
    async fn read_all(&self) -> Result<Vec<Vec<String>>, SheetError> {
        let resp = self
            .http
            .get(self.values_url())
            .bearer_auth(&self.api_token)
            .send()
            .await?
            .error_for_status()?;

        let range: ValueRange = resp
            .json()
            .await
            .map_err(|e| SheetError::Unexpected(e.to_string()))?;
        Ok(range.values)
    }

    async fn replace_all(&self, rows: Vec<Vec<String>>) -> Result<(), SheetError> {
        self.http
            .post(format!("{}:clear", self.values_url()))
            .bearer_auth(&self.api_token)
            .send()
            .await?
            .error_for_status()?;

        self.http
            .put(self.values_url())
            .bearer_auth(&self.api_token)
            .query(&[("valueInputOption", "RAW")])
            .json(&ValueRange { values: rows })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(worksheet: &str) -> GoogleSheetsClient {
        GoogleSheetsClient {
            http: Client::new(),
            base_url: SHEETS_API_BASE.into(),
            spreadsheet_id: "sheet123".into(),
            worksheet: worksheet.into(),
            api_token: "token".into(),
        }
    }

    #[test]
    fn test_values_url_plain_worksheet() {
        assert_eq!(
            client("CryptoHoldings").values_url(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet123/values/CryptoHoldings"
        );
    }

    #[test]
    fn test_values_url_percent_encodes_worksheet() {
        assert_eq!(
            client("My Holdings!2026").values_url(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet123/values/My%20Holdings%212026"
        );
    }
}
