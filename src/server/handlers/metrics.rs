//! Prometheus metrics handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum::IntoEnumIterator;

use super::super::types::ServerState;
use crate::error_handling::ErrorKind;

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<ServerState>) -> Response {
    let stats = &state.stats;

    let mut metrics = format!(
        r#"# HELP header_inspector_inspections_total Total number of inspections handled
# TYPE header_inspector_inspections_total counter
header_inspector_inspections_total {}

# HELP header_inspector_inspections_succeeded_total Inspections that returned a result
# TYPE header_inspector_inspections_succeeded_total counter
header_inspector_inspections_succeeded_total {}

# HELP header_inspector_redirects_followed_total Redirect hops followed by successful inspections
# TYPE header_inspector_redirects_followed_total counter
header_inspector_redirects_followed_total {}

# HELP header_inspector_uptime_seconds Seconds since the server started
# TYPE header_inspector_uptime_seconds gauge
header_inspector_uptime_seconds {}

# HELP header_inspector_inspections_failed_total Failed inspections by error kind
# TYPE header_inspector_inspections_failed_total counter
"#,
        stats.total(),
        stats.succeeded(),
        stats.redirects_followed(),
        state.start_time.elapsed().as_secs_f64(),
    );
    for kind in ErrorKind::iter() {
        metrics.push_str(&format!(
            "header_inspector_inspections_failed_total{{kind=\"{}\"}} {}\n",
            kind.as_str(),
            stats.failure_count(kind)
        ));
    }

    (StatusCode::OK, metrics).into_response()
}
