//! The `/api/transfers` endpoint handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use super::ApiState;

/// Runs the pipeline once and returns the ranked transfers.
///
/// A failed run answers `500` with the failure body; partial results are
/// never returned.
pub async fn transfers(State(state): State<ApiState>) -> impl IntoResponse {
    let response = state.pipeline.respond().await;
    let status =
        if response.is_success() { StatusCode::OK } else { StatusCode::INTERNAL_SERVER_ERROR };
    (status, Json(response))
}
