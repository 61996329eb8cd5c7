use std::sync::Arc;
use std::time::Duration;

use chainfolio::api::router::create_router;
use chainfolio::config::AppConfig;
use chainfolio::explorers::Explorers;
use chainfolio::metrics::init_metrics;
use chainfolio::session::SessionStore;
use chainfolio::sheets::{GoogleSheetsClient, MemorySheet, SheetSink};
use chainfolio::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);
    let metrics_handle = init_metrics();

    // One shared HTTP client for every outbound call. The request timeout
    // keeps an unresponsive explorer from stalling a request forever.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let explorers = Arc::new(Explorers::new(http.clone(), &config));

    let sheets: Arc<dyn SheetSink> = match GoogleSheetsClient::from_config(http, &config) {
        Some(client) => Arc::new(client),
        None => {
            tracing::warn!("No Google Sheets credentials — saves will go to an in-memory sheet");
            Arc::new(MemorySheet::new())
        }
    };

    let sessions = Arc::new(SessionStore::new(config.credentials()));

    let state = AppState {
        config,
        explorers,
        sheets,
        sessions,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
