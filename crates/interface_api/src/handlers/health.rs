//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use core_kernel::{AdapterHealth, HealthCheckResult, HealthCheckable};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub upstreams: Vec<HealthCheckResult>,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check (includes upstream collaborators)
///
/// Upstream trouble never makes the service unready, since every endpoint
/// has fallback data; it only turns the status to "degraded".
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let (documents, translation) = tokio::join!(
        state.documents.health_check(),
        state.translator.health_check(),
    );
    let upstreams = vec![documents, translation];

    let status = if upstreams.iter().all(|u| u.status == AdapterHealth::Healthy) {
        "ready"
    } else {
        "degraded"
    };

    Json(ReadinessResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstreams,
    })
}
