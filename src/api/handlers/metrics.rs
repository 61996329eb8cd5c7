use axum::extract::State;

use crate::AppState;

/// Prometheus scrape endpoint.
pub async fn render(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}
