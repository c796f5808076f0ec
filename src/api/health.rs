//! Health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::LoadStatus;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint (ready once the camera list has been loaded)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Camera list loaded", body = HealthResponse),
        (status = 503, description = "Camera list not loaded yet", body = HealthResponse)
    )
)]
pub async fn readiness_check(State(state): State<crate::AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = match state.services.cameras.load_status().await {
        LoadStatus::Loaded { .. } => (StatusCode::OK, "ready"),
        LoadStatus::Failed { .. } => (StatusCode::SERVICE_UNAVAILABLE, "load_failed"),
        LoadStatus::NotLoaded | LoadStatus::Loading => (StatusCode::SERVICE_UNAVAILABLE, "loading"),
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
