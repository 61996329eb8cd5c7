use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::require_session;
use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Public routes — no session required
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render))
        .route("/api/auth/login", post(handlers::auth::login));

    // Protected routes — require a session token from /api/auth/login
    let protected = Router::new()
        .route("/api/auth/logout", post(handlers::auth::logout))
        // Exposure table: compute, and compute-then-save
        .route("/api/exposure", post(handlers::exposure::report))
        .route("/api/exposure/save", post(handlers::exposure::save))
        // Session portfolio
        .route(
            "/api/portfolio",
            get(handlers::portfolio::list).post(handlers::portfolio::add),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    // CORS: the dashboard frontend may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
