use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Build the Prometheus recorder and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
///
/// Only one global recorder can exist per process; repeated calls (as in
/// the test suite) keep the first one and still hand back a usable handle.
pub fn init_metrics() -> PrometheusHandle {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    if metrics::set_global_recorder(recorder).is_err() {
        tracing::debug!("global metrics recorder already installed");
    }

    // Pre-register counters so they appear even before the first increment.
    counter!("logins_total").absolute(0);
    counter!("login_failures_total").absolute(0);
    counter!("exposure_reports_total").absolute(0);
    counter!("explorer_fetch_failures_total").absolute(0);
    counter!("sheet_saves_total").absolute(0);
    counter!("sheet_save_failures_total").absolute(0);

    // Pre-register gauges at zero.
    gauge!("active_sessions").set(0.0);

    handle
}
