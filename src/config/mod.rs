use std::collections::HashMap;
use std::env;

const DEFAULT_WORKSHEET: &str = "CryptoHoldings";

// Fixture credential pair carried over from the original dashboard.
// Override via DASHBOARD_EMAIL / DASHBOARD_PASSWORD in any real deployment.
const DEFAULT_EMAIL: &str = "admin@example.com";
const DEFAULT_PASSWORD: &str = "securepassword123";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub http_timeout_secs: u64,

    // Explorer API keys (optional — Algorand needs none)
    pub etherscan_api_key: Option<String>,
    pub xdc_api_key: Option<String>,

    // Google Sheets sink (optional — falls back to an in-memory sheet)
    pub gsheet_spreadsheet_id: Option<String>,
    pub gsheet_api_token: Option<String>,
    pub gsheet_worksheet: String,

    // Static dashboard login
    pub dashboard_email: String,
    pub dashboard_password: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .unwrap_or(10),

            etherscan_api_key: env::var("ETHERSCAN_API_KEY").ok(),
            xdc_api_key: env::var("XDC_API_KEY").ok(),

            gsheet_spreadsheet_id: env::var("GSHEET_SPREADSHEET_ID").ok(),
            gsheet_api_token: env::var("GSHEET_API_TOKEN").ok(),
            gsheet_worksheet: env::var("GSHEET_WORKSHEET")
                .unwrap_or_else(|_| DEFAULT_WORKSHEET.into()),

            dashboard_email: env::var("DASHBOARD_EMAIL")
                .unwrap_or_else(|_| DEFAULT_EMAIL.into()),
            dashboard_password: env::var("DASHBOARD_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_PASSWORD.into()),
        })
    }

    /// Returns true if both Google Sheets settings are configured.
    pub fn has_sheet_backend(&self) -> bool {
        self.gsheet_spreadsheet_id.is_some() && self.gsheet_api_token.is_some()
    }

    /// The static credential table consumed by the session store.
    pub fn credentials(&self) -> HashMap<String, String> {
        HashMap::from([(self.dashboard_email.clone(), self.dashboard_password.clone())])
    }
}
