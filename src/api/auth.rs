use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::AppState;

/// The authenticated identity attached to a request once its session
/// token checks out.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub token: Uuid,
    pub email: String,
}

/// Session-token authentication middleware.
///
/// Every protected request must carry `Authorization: Bearer <token>`
/// where the token is a session id issued by `POST /api/auth/login`.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|t| Uuid::parse_str(t.trim()).ok());

    let Some(token) = token else {
        return (
            StatusCode::UNAUTHORIZED,
            "Missing or invalid Authorization header",
        )
            .into_response();
    };

    match state.sessions.email_for(token).await {
        Some(email) => {
            req.extensions_mut().insert(AuthedUser { token, email });
            next.run(req).await
        }
        None => (StatusCode::UNAUTHORIZED, "Invalid or expired session").into_response(),
    }
}
