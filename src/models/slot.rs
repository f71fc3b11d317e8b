//! Slot models

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::time::ClockTime;

/// A bookable span, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeSlot {
    #[schema(value_type = String, example = "09:00")]
    pub start: ClockTime,
    #[schema(value_type = String, example = "10:00")]
    pub end: ClockTime,
}

impl TimeSlot {
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }
}

/// A slot of a given day with its price and display labels
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DaySlot {
    #[schema(value_type = String, example = "23:00")]
    pub start: ClockTime,
    #[schema(value_type = String, example = "24:00")]
    pub end: ClockTime,
    /// Start as shown to users
    pub display_start: String,
    /// End as shown to users (`24:00` becomes `00:00`)
    pub display_end: String,
    /// Price without racket rental
    pub price: u32,
    /// Slot start is already behind us
    pub in_past: bool,
}

/// Query parameters for raw slot generation
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SlotQuery {
    /// Window start (HH:mm), defaults to working hours start
    pub start: Option<String>,
    /// Window end (HH:mm), defaults to working hours end
    pub end: Option<String>,
    /// Slot length in minutes, defaults to the configured slot duration
    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration: Option<u32>,
}

/// Query parameters for the priced slot grid of a day
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct DaySlotQuery {
    /// Date (YYYY-MM-DD)
    #[validate(length(equal = 10, message = "Date must be YYYY-MM-DD"))]
    pub date: String,
    /// Booking duration in minutes (one of the allowed durations)
    pub duration: Option<u32>,
}

/// Priced slot grid of a day
#[derive(Debug, Serialize, ToSchema)]
pub struct DaySlotsResponse {
    pub date: String,
    pub duration: u32,
    pub slots: Vec<DaySlot>,
}

/// Request to find which available starts can host a booking
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct FitRequest {
    /// Hourly starts reported free (HH:mm)
    #[schema(value_type = Vec<String>, example = json!(["09:00", "10:00", "12:00"]))]
    pub available_starts: Vec<ClockTime>,
    /// Booking duration in minutes
    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration: u32,
}

/// Starts that can host the whole booking
#[derive(Debug, Serialize, ToSchema)]
pub struct FitResponse {
    #[schema(value_type = Vec<String>)]
    pub starts: Vec<ClockTime>,
}
