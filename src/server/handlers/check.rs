//! Header inspection handlers.
//!
//! Both handlers accept `url` and `userAgent` and return the inspection result
//! as JSON. Malformed bodies and query strings are reported as `InvalidInput`
//! with the same error payload as any other failure.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

use super::super::types::{ApiError, ServerState};
use crate::error_handling::InspectError;
use crate::inspect::{InspectionRequest, InspectionResult};

/// `POST /api/check-headers` with a JSON body
pub async fn check_headers_post(
    State(state): State<ServerState>,
    body: Result<Json<InspectionRequest>, JsonRejection>,
) -> Result<Json<InspectionResult>, ApiError> {
    let request = body
        .map(|Json(request)| request)
        .map_err(|rejection| InspectError::InvalidInput(rejection.body_text()));
    run_inspection(&state, request).await
}

/// `GET /api/check-headers?url=...&userAgent=...`
pub async fn check_headers_get(
    State(state): State<ServerState>,
    query: Result<Query<InspectionRequest>, QueryRejection>,
) -> Result<Json<InspectionResult>, ApiError> {
    let request = query
        .map(|Query(request)| request)
        .map_err(|rejection| InspectError::InvalidInput(rejection.body_text()));
    run_inspection(&state, request).await
}

async fn run_inspection(
    state: &ServerState,
    request: Result<InspectionRequest, InspectError>,
) -> Result<Json<InspectionResult>, ApiError> {
    let outcome = match request {
        Ok(request) => state.inspector.inspect(&request).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => {
            state.stats.record_success(result.redirects.len());
            Ok(Json(result))
        }
        Err(e) => {
            state.stats.record_failure(e.kind());
            Err(ApiError(e))
        }
    }
}
