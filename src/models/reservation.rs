//! Reservation models used by the booking rules

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Reservation status as stored by the booking backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Booked,
    Cancelled,
    NoShow,
}

/// Cancellation eligibility request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CancellationRequest {
    pub status: ReservationStatus,
    /// Reservation date (YYYY-MM-DD)
    #[validate(length(equal = 10, message = "Date must be YYYY-MM-DD"))]
    pub date: String,
    /// Reservation start (HH:mm)
    #[validate(length(min = 4, max = 5, message = "Time must be HH:mm"))]
    pub start_time: String,
}

/// Why a reservation can or cannot be cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CancellationVerdict {
    Allowed,
    NotBooked,
    AlreadyStarted,
    InsideCancelWindow,
}

/// Cancellation eligibility
#[derive(Debug, Serialize, ToSchema)]
pub struct CancellationResponse {
    pub can_cancel: bool,
    pub verdict: CancellationVerdict,
    /// Minutes left until the reservation starts, negative once started
    pub minutes_until_start: i64,
    pub cancel_window_hours: u32,
}

/// Booking eligibility request for a date and start time
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EligibilityRequest {
    /// Date (YYYY-MM-DD)
    #[validate(length(equal = 10, message = "Date must be YYYY-MM-DD"))]
    pub date: String,
    /// Slot start (HH:mm)
    #[validate(length(min = 4, max = 5, message = "Time must be HH:mm"))]
    pub start_time: String,
}

/// Booking eligibility
#[derive(Debug, Serialize, ToSchema)]
pub struct EligibilityResponse {
    pub bookable: bool,
    pub in_past: bool,
    pub within_booking_window: bool,
    /// Last bookable date (YYYY-MM-DD)
    pub last_bookable_date: String,
}
