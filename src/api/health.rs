//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

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

/// Booking window the server is serving
#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    /// Opening time (HH:mm)
    pub working_hours_start: String,
    /// Closing time (HH:mm), `24:00` for midnight
    pub working_hours_end: String,
    /// Default slot length in minutes
    pub slot_duration_minutes: u32,
}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let (start, end) = state.services.slots.working_hours();
    Json(ReadinessResponse {
        status: "ready".to_string(),
        working_hours_start: start.to_string(),
        working_hours_end: end.to_string(),
        slot_duration_minutes: state.config.booking.slot_duration_minutes,
    })
}
