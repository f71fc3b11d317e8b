//! Pricing models (day types, bands, rate table, quotes)

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::PricingConfig;

use super::time::ClockTime;

/// First hour of the day band
pub const DAY_BAND_START_HOUR: u32 = 8;
/// First hour of the evening band, which runs until the end of the day
pub const EVENING_BAND_START_HOUR: u32 = 18;

// ---------------------------------------------------------------------------
// DayType
// ---------------------------------------------------------------------------

/// Weekday or weekend, selecting which rates apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    /// Day type for a Sunday-first day of week (0 = Sunday, 6 = Saturday)
    pub fn from_day_of_week(day_of_week: u8) -> Self {
        match day_of_week {
            0 | 6 => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }

    pub fn of_date(date: NaiveDate) -> Self {
        Self::from_day_of_week(day_of_week(date))
    }
}

/// Sunday-first day of week of a calendar date (0 = Sunday, 6 = Saturday)
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

// ---------------------------------------------------------------------------
// Band
// ---------------------------------------------------------------------------

/// Time-of-day band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// 08:00 - 18:00
    Day,
    /// 18:00 - 24:00
    Evening,
}

impl Band {
    /// Band billed for an hour. Hours before the day band opens are billed
    /// as day hours.
    pub fn of_hour(hour: u32) -> Self {
        if (EVENING_BAND_START_HOUR..24).contains(&hour) {
            Band::Evening
        } else {
            Band::Day
        }
    }

    /// Half-open hour range `[start, end)` covered by the band
    pub fn hours(self) -> (u32, u32) {
        match self {
            Band::Day => (DAY_BAND_START_HOUR, EVENING_BAND_START_HOUR),
            Band::Evening => (EVENING_BAND_START_HOUR, 24),
        }
    }
}

// ---------------------------------------------------------------------------
// RateTable
// ---------------------------------------------------------------------------

/// Hourly rates for every day type and band, plus the racket surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RateTable {
    pub weekday_day: u32,
    pub weekday_evening: u32,
    pub weekend_day: u32,
    pub weekend_evening: u32,
    pub racket: u32,
}

impl RateTable {
    pub fn rate(&self, day_type: DayType, band: Band) -> u32 {
        match (day_type, band) {
            (DayType::Weekday, Band::Day) => self.weekday_day,
            (DayType::Weekday, Band::Evening) => self.weekday_evening,
            (DayType::Weekend, Band::Day) => self.weekend_day,
            (DayType::Weekend, Band::Evening) => self.weekend_evening,
        }
    }
}

impl From<&PricingConfig> for RateTable {
    fn from(config: &PricingConfig) -> Self {
        Self {
            weekday_day: config.weekday_day,
            weekday_evening: config.weekday_evening,
            weekend_day: config.weekend_day,
            weekend_evening: config.weekend_evening,
            racket: config.racket,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::from(&PricingConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

/// Charge for one hourly step of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct HourCharge {
    /// Step start
    #[schema(value_type = String, example = "22:00")]
    pub start: ClockTime,
    pub band: Band,
    pub amount: u32,
}

/// Detailed price for a booking span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PriceQuote {
    pub date: NaiveDate,
    #[schema(value_type = String, example = "22:00")]
    pub start_time: ClockTime,
    /// End of the span, `24:00` for midnight
    #[schema(value_type = String, example = "24:00")]
    pub end_time: ClockTime,
    pub day_type: DayType,
    pub hours: Vec<HourCharge>,
    /// Sum of the hourly charges
    pub base: u32,
    /// Racket surcharge, 0 when not requested
    pub racket: u32,
    pub total: u32,
}

/// Price quote request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct QuoteRequest {
    /// Booking date (YYYY-MM-DD)
    #[validate(length(equal = 10, message = "Date must be YYYY-MM-DD"))]
    pub date: String,
    /// Start time (HH:mm)
    #[validate(length(min = 4, max = 5, message = "Time must be HH:mm"))]
    pub start_time: String,
    /// End time (HH:mm), `00:00` or `24:00` for midnight
    #[validate(length(min = 4, max = 5, message = "Time must be HH:mm"))]
    pub end_time: String,
    /// Add racket rental
    #[serde(default)]
    pub racket: bool,
}

/// Query parameters for a single hourly rate
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RateQuery {
    /// Hour of day (0-23)
    #[validate(range(max = 23, message = "Hour must be between 0 and 23"))]
    pub hour: u32,
    /// Day of week (0=Sunday, 6=Saturday)
    #[validate(range(max = 6, message = "Day of week must be between 0 and 6"))]
    pub day_of_week: u8,
}

/// Single hourly rate
#[derive(Debug, Serialize, ToSchema)]
pub struct RateResponse {
    pub hour: u32,
    pub day_of_week: u8,
    pub day_type: DayType,
    pub band: Band,
    pub rate: u32,
}

/// One row of the published price list
#[derive(Debug, Serialize, ToSchema)]
pub struct BandRate {
    pub day_type: DayType,
    pub band: Band,
    /// Band start (HH:mm)
    #[schema(value_type = String, example = "18:00")]
    pub start: ClockTime,
    /// Band end (HH:mm), `24:00` for midnight
    #[schema(value_type = String, example = "24:00")]
    pub end: ClockTime,
    pub rate: u32,
}

/// Published price list
#[derive(Debug, Serialize, ToSchema)]
pub struct RatesResponse {
    pub bands: Vec<BandRate>,
    pub racket: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type() {
        assert_eq!(DayType::from_day_of_week(0), DayType::Weekend);
        assert_eq!(DayType::from_day_of_week(6), DayType::Weekend);
        for d in 1..=5 {
            assert_eq!(DayType::from_day_of_week(d), DayType::Weekday);
        }
        // 2024-01-01 was a Monday, 2024-01-06 a Saturday
        assert_eq!(day_of_week(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 1);
        assert_eq!(DayType::of_date(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()), DayType::Weekend);
    }

    #[test]
    fn test_band_of_hour() {
        assert_eq!(Band::of_hour(8), Band::Day);
        assert_eq!(Band::of_hour(17), Band::Day);
        assert_eq!(Band::of_hour(18), Band::Evening);
        assert_eq!(Band::of_hour(23), Band::Evening);
        assert_eq!(Band::of_hour(3), Band::Day);
    }
}
