//! Slot endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use validator::Validate;

use crate::{
    error::AppResult,
    models::slot::{DaySlotQuery, DaySlotsResponse, FitRequest, FitResponse, SlotQuery, TimeSlot},
};

/// Generate slots over a time window
#[utoipa::path(
    get,
    path = "/slots",
    tag = "slots",
    params(SlotQuery),
    responses(
        (status = 200, description = "Generated slots", body = Vec<TimeSlot>),
        (status = 400, description = "Invalid time or duration", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_slots(
    State(state): State<crate::AppState>,
    Query(query): Query<SlotQuery>,
) -> AppResult<Json<Vec<TimeSlot>>> {
    query.validate()?;
    let slots = state.services.slots.slots(&query)?;
    Ok(Json(slots))
}

/// Priced slot grid of a day
#[utoipa::path(
    get,
    path = "/slots/day",
    tag = "slots",
    params(DaySlotQuery),
    responses(
        (status = 200, description = "Slots of the day with prices", body = DaySlotsResponse),
        (status = 400, description = "Invalid date or duration", body = crate::error::ErrorResponse)
    )
)]
pub async fn day_slots(
    State(state): State<crate::AppState>,
    Query(query): Query<DaySlotQuery>,
) -> AppResult<Json<DaySlotsResponse>> {
    query.validate()?;
    let now = Local::now().naive_local();
    let response = state
        .services
        .slots
        .day_slots_request(&query.date, query.duration, now)?;
    Ok(Json(response))
}

/// Keep the available starts that can host a booking of the given duration
#[utoipa::path(
    post,
    path = "/slots/fit",
    tag = "slots",
    request_body = FitRequest,
    responses(
        (status = 200, description = "Starts covering the whole duration", body = FitResponse),
        (status = 400, description = "Invalid duration", body = crate::error::ErrorResponse)
    )
)]
pub async fn fit_slots(
    State(state): State<crate::AppState>,
    Json(request): Json<FitRequest>,
) -> AppResult<Json<FitResponse>> {
    request.validate()?;
    let starts = state.services.slots.fit(&request)?;
    Ok(Json(FitResponse { starts }))
}
