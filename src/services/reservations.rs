//! Booking rules for reservations (cancel window, booking horizon)
//!
//! Every check takes the current local time explicitly; handlers pass
//! `Local::now()`.

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{
        reservation::{
            CancellationRequest, CancellationResponse, CancellationVerdict, EligibilityRequest,
            EligibilityResponse, ReservationStatus,
        },
        time::{parse_iso_date, ClockTime},
    },
};

/// Whole minutes from `now` until `start` on `date`, rounded down
pub fn minutes_until(date: NaiveDate, start: ClockTime, now: NaiveDateTime) -> i64 {
    (start.on(date) - now).num_milliseconds().div_euclid(60_000)
}

pub fn is_slot_in_past(date: NaiveDate, start: ClockTime, now: NaiveDateTime) -> bool {
    start.on(date) < now
}

/// Last date that can still be booked from `today`
pub fn last_bookable_date(today: NaiveDate, max_days_ahead: u32) -> NaiveDate {
    today
        .checked_add_days(Days::new(u64::from(max_days_ahead)))
        .unwrap_or(NaiveDate::MAX)
}

pub fn is_within_booking_window(date: NaiveDate, today: NaiveDate, max_days_ahead: u32) -> bool {
    date >= today && date <= last_bookable_date(today, max_days_ahead)
}

/// Only booked reservations can be cancelled, and only while at least
/// `cancel_window_hours` remain before they start
pub fn cancellation_verdict(
    status: ReservationStatus,
    date: NaiveDate,
    start: ClockTime,
    now: NaiveDateTime,
    cancel_window_hours: u32,
) -> CancellationVerdict {
    if status != ReservationStatus::Booked {
        return CancellationVerdict::NotBooked;
    }
    let minutes = minutes_until(date, start, now);
    if minutes < 0 {
        CancellationVerdict::AlreadyStarted
    } else if minutes < i64::from(cancel_window_hours) * 60 {
        CancellationVerdict::InsideCancelWindow
    } else {
        CancellationVerdict::Allowed
    }
}

pub fn can_cancel(
    status: ReservationStatus,
    date: NaiveDate,
    start: ClockTime,
    now: NaiveDateTime,
    cancel_window_hours: u32,
) -> bool {
    cancellation_verdict(status, date, start, now, cancel_window_hours) == CancellationVerdict::Allowed
}

#[derive(Clone)]
pub struct ReservationsService {
    max_days_ahead: u32,
    cancel_window_hours: u32,
}

impl ReservationsService {
    pub fn new(booking: &BookingConfig) -> Self {
        Self {
            max_days_ahead: booking.max_days_ahead,
            cancel_window_hours: booking.cancel_window_hours,
        }
    }

    pub fn cancellation(
        &self,
        request: &CancellationRequest,
        now: NaiveDateTime,
    ) -> AppResult<CancellationResponse> {
        let date = parse_iso_date(&request.date)?;
        let start = ClockTime::parse(&request.start_time)?;
        let verdict = cancellation_verdict(request.status, date, start, now, self.cancel_window_hours);

        Ok(CancellationResponse {
            can_cancel: verdict == CancellationVerdict::Allowed,
            verdict,
            minutes_until_start: minutes_until(date, start, now),
            cancel_window_hours: self.cancel_window_hours,
        })
    }

    pub fn eligibility(
        &self,
        request: &EligibilityRequest,
        now: NaiveDateTime,
    ) -> AppResult<EligibilityResponse> {
        let date = parse_iso_date(&request.date)?;
        let start = ClockTime::parse(&request.start_time)?;
        if start.is_end_of_day() {
            return Err(AppError::Validation("A booking cannot start at 24:00".to_string()));
        }

        let today = now.date();
        let in_past = is_slot_in_past(date, start, now);
        let within_booking_window = is_within_booking_window(date, today, self.max_days_ahead);

        Ok(EligibilityResponse {
            bookable: !in_past && within_booking_window,
            in_past,
            within_booking_window,
            last_bookable_date: last_bookable_date(today, self.max_days_ahead)
                .format("%Y-%m-%d")
                .to_string(),
        })
    }
}
