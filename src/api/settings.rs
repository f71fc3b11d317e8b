//! Settings endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::RateTable;

/// Booking settings published to clients
#[derive(Serialize, ToSchema)]
pub struct SettingsResponse {
    /// Working hours start (HH:mm)
    pub working_hours_start: String,
    /// Working hours end (HH:mm), `24:00` for midnight
    pub working_hours_end: String,
    /// Default slot duration in minutes
    pub slot_duration_minutes: u32,
    /// Booking durations clients may choose from
    pub allowed_durations: Vec<u32>,
    /// How many days ahead a court can be booked
    pub max_days_ahead: u32,
    /// Hours before start after which cancelling is no longer possible
    pub cancel_window_hours: u32,
    /// Hourly rates and racket surcharge
    pub rates: RateTable,
}

/// Get current settings
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Current settings", body = SettingsResponse)
    )
)]
pub async fn get_settings(State(state): State<crate::AppState>) -> Json<SettingsResponse> {
    let (start, end) = state.services.slots.working_hours();
    let booking = &state.config.booking;

    Json(SettingsResponse {
        working_hours_start: start.to_string(),
        working_hours_end: end.to_string(),
        slot_duration_minutes: booking.slot_duration_minutes,
        allowed_durations: booking.allowed_durations.clone(),
        max_days_ahead: booking.max_days_ahead,
        cancel_window_hours: booking.cancel_window_hours,
        rates: *state.services.pricing.rates(),
    })
}
