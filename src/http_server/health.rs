//! The `/health` endpoint.

use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Liveness probe. Does not touch the RPC endpoint.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
