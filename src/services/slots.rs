//! Slot generation service

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{
        slot::{DaySlot, DaySlotsResponse, FitRequest, SlotQuery, TimeSlot},
        time::{parse_iso_date, ClockTime, MINUTES_PER_DAY, MINUTES_PER_HOUR},
    },
    services::{pricing::PricingService, reservations::is_slot_in_past},
};

/// Cut `[start, end)` into consecutive slots of `duration` minutes.
///
/// Slots start at `start` and never run past `end`; a remainder shorter
/// than `duration` is dropped. A zero duration yields no slots.
pub fn generate_slots(start: ClockTime, end: ClockTime, duration: u32) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    if duration == 0 {
        return slots;
    }

    let mut current = start;
    while let Some(slot_end) = current
        .minutes()
        .checked_add(duration)
        .filter(|m| *m <= end.minutes())
        .and_then(ClockTime::from_minutes)
    {
        slots.push(TimeSlot {
            start: current,
            end: slot_end,
        });
        current = slot_end;
    }

    slots
}

/// Starts from which a booking of `duration` minutes is fully covered by
/// `available` hourly starts. A two hour booking at 10:00 needs both 10:00
/// and 11:00 to be free.
pub fn fitting_starts(available: &[ClockTime], duration: u32) -> Vec<ClockTime> {
    if duration > MINUTES_PER_DAY {
        return Vec::new();
    }
    let free: BTreeSet<ClockTime> = available.iter().copied().collect();
    let steps = duration.div_ceil(MINUTES_PER_HOUR).max(1);

    free.iter()
        .copied()
        .filter(|start| {
            if start.minutes() + duration > ClockTime::END_OF_DAY.minutes() {
                return false;
            }
            (0..steps).all(|step| {
                ClockTime::from_minutes(start.minutes() + step * MINUTES_PER_HOUR)
                    .is_some_and(|t| free.contains(&t))
            })
        })
        .collect()
}

#[derive(Clone)]
pub struct SlotsService {
    working_start: ClockTime,
    working_end: ClockTime,
    default_duration: u32,
    allowed_durations: Vec<u32>,
    pricing: PricingService,
}

impl SlotsService {
    pub fn new(booking: &BookingConfig, pricing: PricingService) -> AppResult<Self> {
        Ok(Self {
            working_start: ClockTime::parse(&booking.working_hours_start)?,
            working_end: ClockTime::parse(&booking.working_hours_end)?,
            default_duration: booking.slot_duration_minutes,
            allowed_durations: booking.allowed_durations.clone(),
            pricing,
        })
    }

    pub fn working_hours(&self) -> (ClockTime, ClockTime) {
        (self.working_start, self.working_end)
    }

    /// Slots over an arbitrary window, falling back to working hours and
    /// the default duration for anything not given
    pub fn slots(&self, query: &SlotQuery) -> AppResult<Vec<TimeSlot>> {
        let start = match &query.start {
            Some(s) => ClockTime::parse(s)?,
            None => self.working_start,
        };
        let end = match &query.end {
            Some(s) => ClockTime::parse(s)?,
            None => self.working_end,
        };
        let duration = query.duration.unwrap_or(self.default_duration);

        let slots = generate_slots(start, end, duration);
        tracing::debug!("Generated {} slots of {} min in {} - {}", slots.len(), duration, start, end);
        Ok(slots)
    }

    /// Working-hours slots of `date`, priced and flagged against `now`
    pub fn day_slots(&self, date: NaiveDate, duration: u32, now: NaiveDateTime) -> Vec<DaySlot> {
        generate_slots(self.working_start, self.working_end, duration)
            .into_iter()
            .map(|slot| DaySlot {
                start: slot.start,
                end: slot.end,
                display_start: slot.start.display(),
                display_end: slot.end.display(),
                price: self.pricing.price(slot.start, slot.end, date, false),
                in_past: is_slot_in_past(date, slot.start, now),
            })
            .collect()
    }

    pub fn day_slots_request(
        &self,
        date: &str,
        duration: Option<u32>,
        now: NaiveDateTime,
    ) -> AppResult<DaySlotsResponse> {
        let parsed = parse_iso_date(date)?;
        let duration = self.booking_duration(duration)?;

        Ok(DaySlotsResponse {
            date: parsed.format("%Y-%m-%d").to_string(),
            duration,
            slots: self.day_slots(parsed, duration, now),
        })
    }

    pub fn fit(&self, request: &FitRequest) -> AppResult<Vec<ClockTime>> {
        let duration = self.booking_duration(Some(request.duration))?;
        Ok(fitting_starts(&request.available_starts, duration))
    }

    /// Resolve a booking duration, which must be one of the allowed ones
    fn booking_duration(&self, duration: Option<u32>) -> AppResult<u32> {
        let duration = duration.unwrap_or(self.default_duration);
        if !self.allowed_durations.contains(&duration) {
            tracing::warn!("Rejected booking duration {} min", duration);
            return Err(AppError::Validation(format!(
                "Duration {} is not one of {:?}",
                duration, self.allowed_durations
            )));
        }
        Ok(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RateTable;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    fn service() -> SlotsService {
        SlotsService::new(&BookingConfig::default(), PricingService::new(RateTable::default())).unwrap()
    }

    #[test]
    fn test_hourly_slots_over_working_hours() {
        let slots = generate_slots(t("09:00"), t("24:00"), 60);
        assert_eq!(slots.len(), 15);
        assert_eq!(slots[0].start.to_string(), "09:00");
        assert_eq!(slots[0].end.to_string(), "10:00");
        assert_eq!(slots[14].start.to_string(), "23:00");
        assert_eq!(slots[14].end.to_string(), "24:00");
    }

    #[test]
    fn test_two_hour_slots_drop_remainder() {
        let slots = generate_slots(t("09:00"), t("24:00"), 120);
        assert_eq!(slots.len(), 7);
        assert_eq!(slots[6].start.to_string(), "21:00");
        assert_eq!(slots[6].end.to_string(), "23:00");
    }

    #[test]
    fn test_slots_respect_bounds() {
        for duration in [30, 45, 60, 90, 120] {
            let end = t("22:30");
            for slot in generate_slots(t("08:15"), end, duration) {
                assert_eq!(slot.duration_minutes(), duration);
                assert!(slot.end <= end);
            }
        }
    }

    #[test]
    fn test_no_slots_when_window_too_short() {
        assert!(generate_slots(t("09:00"), t("10:00"), 120).is_empty());
        assert!(generate_slots(t("09:00"), t("24:00"), 1000).is_empty());
        // 00:00 as a window end is the start of the day, not its end
        assert!(generate_slots(t("09:00"), t("00:00"), 60).is_empty());
        assert!(generate_slots(t("09:00"), t("24:00"), 0).is_empty());
    }

    #[test]
    fn test_huge_duration_yields_nothing() {
        assert!(generate_slots(t("23:00"), t("24:00"), u32::MAX).is_empty());
        assert!(generate_slots(t("00:00"), t("24:00"), MINUTES_PER_DAY + 1).is_empty());
        assert!(fitting_starts(&[t("23:00")], u32::MAX).is_empty());
        assert!(fitting_starts(&[t("00:00")], MINUTES_PER_DAY + 1).is_empty());
    }

    #[test]
    fn test_generation_is_restartable() {
        let a = generate_slots(t("09:00"), t("24:00"), 60);
        let b = generate_slots(t("09:00"), t("24:00"), 60);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fitting_starts() {
        let free = [t("12:00"), t("09:00"), t("10:00"), t("23:00")];
        let two_hours: Vec<String> = fitting_starts(&free, 120).iter().map(|s| s.to_string()).collect();
        assert_eq!(two_hours, vec!["09:00"]);

        let one_hour: Vec<String> = fitting_starts(&free, 60).iter().map(|s| s.to_string()).collect();
        assert_eq!(one_hour, vec!["09:00", "10:00", "12:00", "23:00"]);
    }

    #[test]
    fn test_day_slots_are_priced() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap().and_hms_opt(12, 30, 0).unwrap();
        let slots = service().day_slots(date, 60, now);

        assert_eq!(slots.len(), 15);
        assert_eq!(slots[0].price, 2600);
        assert!(slots[0].in_past);
        assert!(!slots[4].in_past); // 13:00
        let last = slots.last().unwrap();
        assert_eq!(last.price, 3000);
        assert_eq!(last.end.to_string(), "24:00");
        assert_eq!(last.display_end, "00:00");
    }

    #[test]
    fn test_day_slots_request_checks_duration() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let response = service().day_slots_request("2024-01-02", Some(120), now).unwrap();
        assert_eq!(response.slots.len(), 7);
        assert_eq!(response.slots[0].price, 4000);

        assert!(matches!(
            service().day_slots_request("2024-01-02", Some(90), now),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_slots_query_defaults() {
        let query = SlotQuery {
            start: None,
            end: None,
            duration: None,
        };
        assert_eq!(service().slots(&query).unwrap().len(), 15);

        let query = SlotQuery {
            start: Some("18:00".to_string()),
            end: Some("24:00".to_string()),
            duration: Some(120),
        };
        assert_eq!(service().slots(&query).unwrap().len(), 3);
    }
}
