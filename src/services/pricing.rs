//! Pricing service (hourly rates and booking quotes)

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{
        pricing::{
            day_of_week, Band, BandRate, DayType, HourCharge, PriceQuote, QuoteRequest,
            RateResponse, RateTable, RatesResponse,
        },
        time::{parse_iso_date, ClockTime, MINUTES_PER_HOUR},
    },
};

#[derive(Clone)]
pub struct PricingService {
    rates: RateTable,
}

impl PricingService {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Hourly rate for an hour of the day and a Sunday-first day of week.
    ///
    /// Never fails: hours outside the published bands (before 08:00) are
    /// billed at the day rate.
    pub fn hourly_rate(&self, hour: u32, day_of_week: u8) -> u32 {
        self.rates
            .rate(DayType::from_day_of_week(day_of_week), Band::of_hour(hour))
    }

    /// Total price of `[start, end)` on `date`.
    ///
    /// The span is walked in 60 minute steps from `start`, each step billed
    /// at the rate of the hour it starts in. A trailing partial hour is
    /// billed in full when a step still starts before `end`. Empty spans
    /// cost nothing beyond the optional racket surcharge.
    pub fn price(&self, start: ClockTime, end: ClockTime, date: NaiveDate, racket: bool) -> u32 {
        self.quote(start, end, date, racket).total
    }

    /// Same as [`price`](Self::price), with the per-hour breakdown
    pub fn quote(&self, start: ClockTime, end: ClockTime, date: NaiveDate, racket: bool) -> PriceQuote {
        let dow = day_of_week(date);
        let mut hours = Vec::new();

        let mut cursor = start;
        while cursor < end {
            let hour = cursor.hour();
            hours.push(HourCharge {
                start: cursor,
                band: Band::of_hour(hour),
                amount: self.hourly_rate(hour, dow),
            });
            match ClockTime::from_minutes(cursor.minutes() + MINUTES_PER_HOUR) {
                Some(next) => cursor = next,
                None => break,
            }
        }

        let base: u32 = hours.iter().map(|h| h.amount).sum();
        let racket = if racket { self.rates.racket } else { 0 };

        PriceQuote {
            date,
            start_time: start,
            end_time: end,
            day_type: DayType::from_day_of_week(dow),
            hours,
            base,
            racket,
            total: base + racket,
        }
    }

    /// Quote a client request. Unlike [`quote`](Self::quote), empty or
    /// reversed spans are rejected.
    pub fn quote_request(&self, request: &QuoteRequest) -> AppResult<PriceQuote> {
        let date = parse_iso_date(&request.date)?;
        let start = ClockTime::parse(&request.start_time)?;
        let end = ClockTime::parse_end(&request.end_time)?;

        if start >= end {
            tracing::warn!("Rejected quote for empty span {} - {}", start, end);
            return Err(AppError::Validation(format!(
                "Start time {} must be before end time {}",
                start, end
            )));
        }

        let quote = self.quote(start, end, date, request.racket);
        tracing::debug!(
            "Quoted {} {} - {}: {} ({} hours)",
            date,
            start,
            end,
            quote.total,
            quote.hours.len()
        );
        Ok(quote)
    }

    pub fn rate_for(&self, hour: u32, day_of_week: u8) -> RateResponse {
        RateResponse {
            hour,
            day_of_week,
            day_type: DayType::from_day_of_week(day_of_week),
            band: Band::of_hour(hour),
            rate: self.hourly_rate(hour, day_of_week),
        }
    }

    /// Published price list, weekday rows first
    pub fn price_list(&self) -> RatesResponse {
        let mut bands = Vec::with_capacity(4);
        for day_type in [DayType::Weekday, DayType::Weekend] {
            for band in [Band::Day, Band::Evening] {
                let (from, to) = band.hours();
                let (Some(start), Some(end)) = (ClockTime::from_hm(from, 0), ClockTime::from_hm(to, 0)) else {
                    continue;
                };
                bands.push(BandRate {
                    day_type,
                    band,
                    start,
                    end,
                    rate: self.rates.rate(day_type, band),
                });
            }
        }

        RatesResponse {
            bands,
            racket: self.rates.racket,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONDAY: (i32, u32, u32) = (2024, 1, 1);
    const SATURDAY: (i32, u32, u32) = (2024, 1, 6);

    fn service() -> PricingService {
        PricingService::new(RateTable::default())
    }

    fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    fn end(s: &str) -> ClockTime {
        ClockTime::parse_end(s).unwrap()
    }

    #[test]
    fn test_evening_rates() {
        let pricing = service();
        for hour in 18..24 {
            assert_eq!(pricing.hourly_rate(hour, 0), 3000);
            assert_eq!(pricing.hourly_rate(hour, 6), 3000);
            for dow in 1..=5 {
                assert_eq!(pricing.hourly_rate(hour, dow), 2400);
            }
        }
    }

    #[test]
    fn test_day_rates_and_fallback() {
        let pricing = service();
        assert_eq!(pricing.hourly_rate(8, 1), 2000);
        assert_eq!(pricing.hourly_rate(17, 1), 2000);
        assert_eq!(pricing.hourly_rate(17, 0), 2600);
        // before opening falls back to the day rate
        assert_eq!(pricing.hourly_rate(3, 2), 2000);
        assert_eq!(pricing.hourly_rate(0, 6), 2600);
    }

    #[test]
    fn test_price_single_hours() {
        let pricing = service();
        assert_eq!(pricing.price(t("08:00"), end("09:00"), date(MONDAY), false), 2000);
        assert_eq!(pricing.price(t("23:00"), end("24:00"), date(SATURDAY), false), 3000);
        assert_eq!(pricing.price(t("23:00"), end("00:00"), date(SATURDAY), false), 3000);
    }

    #[test]
    fn test_price_two_evening_hours() {
        let pricing = service();
        assert_eq!(pricing.price(t("22:00"), end("24:00"), date(MONDAY), false), 4800);
    }

    #[test]
    fn test_price_across_bands() {
        let pricing = service();
        // 17:00 day + 18:00 evening
        assert_eq!(pricing.price(t("17:00"), end("19:00"), date(MONDAY), false), 4400);
        assert_eq!(pricing.price(t("17:00"), end("19:00"), date(SATURDAY), false), 5600);
    }

    #[test]
    fn test_racket_added_once() {
        let pricing = service();
        for (s, e) in [("09:00", "10:00"), ("09:00", "11:00"), ("22:00", "24:00")] {
            for d in [MONDAY, SATURDAY] {
                let without = pricing.price(t(s), end(e), date(d), false);
                let with = pricing.price(t(s), end(e), date(d), true);
                assert_eq!(with, without + 300);
            }
        }
    }

    #[test]
    fn test_partial_hours_step_from_start() {
        let pricing = service();
        // steps start at 09:30 and 10:30; the second still starts before 11:00
        assert_eq!(pricing.price(t("09:30"), end("11:00"), date(MONDAY), false), 4000);
        // 17:30 is billed as a day hour even though half of it is evening
        assert_eq!(pricing.price(t("17:30"), end("18:30"), date(MONDAY), false), 2000);
    }

    #[test]
    fn test_empty_span_costs_racket_only() {
        let pricing = service();
        assert_eq!(pricing.price(t("10:00"), end("10:00"), date(MONDAY), false), 0);
        assert_eq!(pricing.price(t("12:00"), end("10:00"), date(MONDAY), true), 300);
    }

    #[test]
    fn test_price_monotonic_in_duration() {
        let pricing = service();
        for d in [MONDAY, SATURDAY] {
            let mut previous = 0;
            for hour in 9..=24 {
                let e = ClockTime::from_hm(hour, 0).unwrap();
                let price = pricing.price(t("08:00"), e, date(d), false);
                assert!(price >= previous);
                previous = price;
            }
        }
    }

    #[test]
    fn test_quote_breakdown() {
        let quote = service().quote(t("17:00"), end("19:00"), date(MONDAY), true);
        assert_eq!(quote.day_type, DayType::Weekday);
        assert_eq!(quote.hours.len(), 2);
        assert_eq!(quote.hours[0].band, Band::Day);
        assert_eq!(quote.hours[1].band, Band::Evening);
        assert_eq!(quote.base, 4400);
        assert_eq!(quote.racket, 300);
        assert_eq!(quote.total, 4700);
    }

    #[test]
    fn test_quote_request_validation() {
        let pricing = service();
        let request = QuoteRequest {
            date: "2024-01-01".to_string(),
            start_time: "22:00".to_string(),
            end_time: "00:00".to_string(),
            racket: false,
        };
        assert_eq!(pricing.quote_request(&request).unwrap().total, 4800);

        let reversed = QuoteRequest {
            start_time: "12:00".to_string(),
            end_time: "10:00".to_string(),
            ..request
        };
        assert!(matches!(
            pricing.quote_request(&reversed),
            Err(AppError::Validation(_))
        ));

        let bad_date = QuoteRequest {
            date: "2024-02-30".to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            racket: false,
        };
        assert!(matches!(pricing.quote_request(&bad_date), Err(AppError::Time(_))));
    }

    #[test]
    fn test_price_list() {
        let list = service().price_list();
        assert_eq!(list.bands.len(), 4);
        assert_eq!(list.racket, 300);
        let weekend_evening = &list.bands[3];
        assert_eq!(weekend_evening.day_type, DayType::Weekend);
        assert_eq!(weekend_evening.band, Band::Evening);
        assert_eq!(weekend_evening.rate, 3000);
        assert_eq!(weekend_evening.end.to_string(), "24:00");
    }

    #[test]
    fn test_full_day_at_maximum_rates() {
        let max = crate::config::MAX_RATE;
        let pricing = PricingService::new(RateTable {
            weekday_day: max,
            weekday_evening: max,
            weekend_day: max,
            weekend_evening: max,
            racket: max,
        });
        let quote = pricing.quote(ClockTime::MIDNIGHT, ClockTime::END_OF_DAY, date(SATURDAY), true);
        assert_eq!(quote.hours.len(), 24);
        assert_eq!(quote.total, 25 * max);
    }
}
