use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use super::exposure::{self, ExposureRequest};
use super::ApiResponse;
use crate::api::auth::AuthedUser;
use crate::errors::AppError;
use crate::models::PortfolioHolding;
use crate::AppState;

#[derive(Serialize)]
pub struct AddHoldingsResponse {
    pub added: usize,
    pub total: usize,
}

/// POST /api/portfolio — recompute the exposure table and append its
/// derived virtual holdings to the session's collection.
pub async fn add(
    State(state): State<AppState>,
    Extension(user): Extension<AuthedUser>,
    Json(body): Json<ExposureRequest>,
) -> Result<Json<ApiResponse<AddHoldingsResponse>>, AppError> {
    let (report, _) = exposure::compute(&state, &body).await;
    let holdings: Vec<PortfolioHolding> = report
        .rows
        .iter()
        .map(PortfolioHolding::from_exposure_row)
        .collect();
    let added = holdings.len();

    let total = state
        .sessions
        .append_holdings(user.token, holdings)
        .await
        .ok_or(AppError::Unauthorized)?;

    tracing::info!(email = %user.email, added, total, "holdings appended to portfolio");
    Ok(Json(ApiResponse::ok(AddHoldingsResponse { added, total })))
}

/// GET /api/portfolio — the session's accumulated virtual holdings.
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthedUser>,
) -> Result<Json<ApiResponse<Vec<PortfolioHolding>>>, AppError> {
    let holdings = state
        .sessions
        .holdings(user.token)
        .await
        .ok_or(AppError::Unauthorized)?;
    Ok(Json(ApiResponse::ok(holdings)))
}
