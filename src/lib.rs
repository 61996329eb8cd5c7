pub mod api;
pub mod config;
pub mod errors;
pub mod explorers;
pub mod exposure;
pub mod metrics;
pub mod models;
pub mod session;
pub mod sheets;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::explorers::Explorers;
use crate::session::SessionStore;
use crate::sheets::SheetSink;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub explorers: Arc<Explorers>,
    pub sheets: Arc<dyn SheetSink>,
    pub sessions: Arc<SessionStore>,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
