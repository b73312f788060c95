//! JSON status handler.

use axum::{extract::State, Json};

use super::super::types::{FailureCounts, ServerState, StatusResponse};
use crate::error_handling::ErrorKind;

/// JSON status endpoint with inspection counters
pub async fn status_handler(State(state): State<ServerState>) -> Json<StatusResponse> {
    let stats = &state.stats;
    Json(StatusResponse {
        total_inspections: stats.total(),
        succeeded: stats.succeeded(),
        failed: stats.total_failures(),
        redirected: stats.redirected(),
        redirects_followed: stats.redirects_followed(),
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        failures: FailureCounts {
            invalid_input: stats.failure_count(ErrorKind::InvalidInput),
            network_error: stats.failure_count(ErrorKind::NetworkError),
            timeout: stats.failure_count(ErrorKind::Timeout),
            too_many_redirects: stats.failure_count(ErrorKind::TooManyRedirects),
        },
    })
}
