//! Reservation rule endpoints

use axum::{extract::State, Json};
use chrono::Local;
use validator::Validate;

use crate::{
    error::AppResult,
    models::reservation::{
        CancellationRequest, CancellationResponse, EligibilityRequest, EligibilityResponse,
    },
};

/// Check whether a reservation can still be cancelled
#[utoipa::path(
    post,
    path = "/reservations/cancellation",
    tag = "reservations",
    request_body = CancellationRequest,
    responses(
        (status = 200, description = "Cancellation eligibility", body = CancellationResponse),
        (status = 400, description = "Invalid date or time", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_cancellation(
    State(state): State<crate::AppState>,
    Json(request): Json<CancellationRequest>,
) -> AppResult<Json<CancellationResponse>> {
    request.validate()?;
    let now = Local::now().naive_local();
    let response = state.services.reservations.cancellation(&request, now)?;
    Ok(Json(response))
}

/// Check whether a slot can be booked now
#[utoipa::path(
    post,
    path = "/reservations/eligibility",
    tag = "reservations",
    request_body = EligibilityRequest,
    responses(
        (status = 200, description = "Booking eligibility", body = EligibilityResponse),
        (status = 400, description = "Invalid date or time", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_eligibility(
    State(state): State<crate::AppState>,
    Json(request): Json<EligibilityRequest>,
) -> AppResult<Json<EligibilityResponse>> {
    request.validate()?;
    let now = Local::now().naive_local();
    let response = state.services.reservations.eligibility(&request, now)?;
    Ok(Json(response))
}
