//! Health check endpoint for monitoring and keepalive.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// RFC 3339 timestamp of the check.
    pub server_time: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        server_time: Utc::now().to_rfc3339(),
    })
}
