use axum::extract::State;
use axum::{Extension, Json};
use metrics::{counter, gauge};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::ApiResponse;
use crate::api::auth::AuthedUser;
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub email: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    match state.sessions.login(&body.email, &body.password).await {
        Some(token) => {
            counter!("logins_total").increment(1);
            gauge!("active_sessions").set(state.sessions.session_count().await as f64);
            tracing::info!(email = %body.email, "login succeeded");
            Ok(Json(ApiResponse::ok(LoginResponse {
                token,
                email: body.email,
            })))
        }
        None => {
            counter!("login_failures_total").increment(1);
            tracing::warn!(email = %body.email, "login rejected");
            Err(AppError::InvalidCredentials)
        }
    }
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthedUser>,
) -> Json<ApiResponse<serde_json::Value>> {
    state.sessions.logout(user.token).await;
    gauge!("active_sessions").set(state.sessions.session_count().await as f64);
    tracing::info!(email = %user.email, "logged out");
    Json(ApiResponse::ok(json!({ "status": "logged_out" })))
}
