use axum::extract::State;
use axum::{Extension, Json};
use chrono::Utc;
use metrics::counter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ApiResponse;
use crate::api::auth::AuthedUser;
use crate::exposure::{build_report, fetch_token_counts, ChainStatus, ExposureReport, YieldAssumptions};
use crate::sheets;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExposureRequest {
    #[serde(default)]
    pub algorand_address: String,
    #[serde(default)]
    pub ethereum_address: String,
    #[serde(default)]
    pub xdc_address: String,
    #[serde(default)]
    pub yields: YieldInputs,
}

/// Optional per-platform yield overrides; anything left out falls back
/// to the dashboard defaults and everything is clamped to [0, 20] here,
/// before the aggregator sees it.
#[derive(Debug, Default, Deserialize)]
pub struct YieldInputs {
    pub lofty: Option<Decimal>,
    pub realt: Option<Decimal>,
    pub ondo: Option<Decimal>,
    pub xdc: Option<Decimal>,
}

impl YieldInputs {
    fn assumptions(&self) -> YieldAssumptions {
        let defaults = YieldAssumptions::default();
        YieldAssumptions {
            lofty: self.lofty.unwrap_or(defaults.lofty),
            realt: self.realt.unwrap_or(defaults.realt),
            ondo: self.ondo.unwrap_or(defaults.ondo),
            xdc: self.xdc.unwrap_or(defaults.xdc),
        }
        .clamped()
    }
}

#[derive(Serialize)]
pub struct ExposureResponse {
    #[serde(flatten)]
    pub report: ExposureReport,
    pub fetch_status: ChainStatus,
}

#[derive(Serialize)]
pub struct SaveResponse {
    pub saved_rows: usize,
    pub fetch_status: ChainStatus,
}

pub(crate) async fn compute(
    state: &AppState,
    req: &ExposureRequest,
) -> (ExposureReport, ChainStatus) {
    let outcome = fetch_token_counts(
        &state.explorers,
        &req.algorand_address,
        &req.ethereum_address,
        &req.xdc_address,
    )
    .await;
    let report = build_report(&outcome.counts, &req.yields.assumptions());
    counter!("exposure_reports_total").increment(1);
    (report, outcome.status)
}

/// POST /api/exposure — fetch counts, build the 4-row table with its
/// blockchain grouping and total annual yield.
pub async fn report(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthedUser>,
    Json(body): Json<ExposureRequest>,
) -> Json<ApiResponse<ExposureResponse>> {
    let (report, fetch_status) = compute(&state, &body).await;
    Json(ApiResponse::ok(ExposureResponse {
        report,
        fetch_status,
    }))
}

/// POST /api/exposure/save — compute the table, then append it to the
/// shared sheet. Sink failures surface as a warning, not a hard error.
pub async fn save(
    State(state): State<AppState>,
    Extension(user): Extension<AuthedUser>,
    Json(body): Json<ExposureRequest>,
) -> Json<ApiResponse<SaveResponse>> {
    let (report, fetch_status) = compute(&state, &body).await;

    match sheets::append_exposure(state.sheets.as_ref(), &user.email, Utc::now(), &report.rows)
        .await
    {
        Ok(()) => {
            counter!("sheet_saves_total").increment(1);
            tracing::info!(email = %user.email, rows = report.rows.len(), "exposure saved to sheet");
            Json(ApiResponse::ok(SaveResponse {
                saved_rows: report.rows.len(),
                fetch_status,
            }))
        }
        Err(e) => {
            counter!("sheet_save_failures_total").increment(1);
            tracing::warn!(error = %e, "sheet save failed");
            Json(ApiResponse::err(format!("could not save to sheet: {e}")))
        }
    }
}
