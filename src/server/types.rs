//! API server data structures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::error_handling::{ErrorKind, InspectError, InspectionStats};
use crate::inspect::Inspector;

/// Shared state for the API server
#[derive(Clone)]
pub struct ServerState {
    pub inspector: Inspector,
    pub stats: Arc<InspectionStats>,
    pub start_time: Arc<Instant>,
}

impl ServerState {
    pub fn new(inspector: Inspector) -> Self {
        Self {
            inspector,
            stats: Arc::new(InspectionStats::new()),
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// JSON body returned for failed inspections
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// An inspection failure rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub InspectError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NetworkError | ErrorKind::TooManyRedirects => StatusCode::BAD_GATEWAY,
            ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<InspectError> for ApiError {
    fn from(e: InspectError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.kind().as_str(),
            message: self.0.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// JSON response for `/status` endpoint
#[derive(Serialize)]
pub struct StatusResponse {
    pub total_inspections: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub redirected: usize,
    pub redirects_followed: usize,
    pub uptime_seconds: f64,
    pub failures: FailureCounts,
}

#[derive(Serialize)]
pub struct FailureCounts {
    pub invalid_input: usize,
    pub network_error: usize,
    pub timeout: usize,
    pub too_many_redirects: usize,
}
