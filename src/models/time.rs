//! Clock times and calendar dates as exchanged with clients
//!
//! Times travel as zero-padded `HH:mm` strings. Internally a time is the
//! number of minutes since midnight in `0..=1440`, where `24:00` (1440) is
//! the end of the day. That sentinel only exists for arithmetic: anything
//! shown to a user goes through [`ClockTime::display`], which renders it as
//! `00:00`.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Errors produced while reading `HH:mm` times and `YYYY-MM-DD` dates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("expected HH:mm, got {0:?}")]
    Format(String),

    #[error("hour out of range in {0:?}")]
    Hour(String),

    #[error("minute out of range in {0:?}")]
    Minute(String),

    #[error("expected YYYY-MM-DD, got {0:?}")]
    Date(String),
}

/// A time of day with minute precision, `00:00` through `24:00`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY);

    /// Build from minutes since midnight; `None` past `24:00`
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(ClockTime(minutes))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if minute >= MINUTES_PER_HOUR {
            return None;
        }
        Self::from_minutes(hour * MINUTES_PER_HOUR + minute)
    }

    /// Parse a `HH:mm` string. `24:00` is accepted, `24:01` and up are not.
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(s.to_string()))?;

        let hour = parse_component(h).ok_or_else(|| TimeParseError::Format(s.to_string()))?;
        let minute = parse_component(m).ok_or_else(|| TimeParseError::Format(s.to_string()))?;

        if minute >= MINUTES_PER_HOUR {
            return Err(TimeParseError::Minute(s.to_string()));
        }
        if hour > 24 || (hour == 24 && minute != 0) {
            return Err(TimeParseError::Hour(s.to_string()));
        }

        Ok(ClockTime(hour * MINUTES_PER_HOUR + minute))
    }

    /// Parse the end of a span: `00:00` means the following midnight
    pub fn parse_end(s: &str) -> Result<Self, TimeParseError> {
        let time = Self::parse(s)?;
        Ok(if time == Self::MIDNIGHT { Self::END_OF_DAY } else { time })
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Hour the time falls in; `24` only for the end-of-day sentinel
    pub fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    pub fn is_end_of_day(self) -> bool {
        self.0 == MINUTES_PER_DAY
    }

    /// Move forward by `minutes`. Landing exactly on the end of the day
    /// gives `24:00`; going past it wraps around to the next morning.
    pub fn add_minutes(self, minutes: u32) -> Self {
        let total = self.0 + minutes;
        if total == MINUTES_PER_DAY {
            Self::END_OF_DAY
        } else {
            ClockTime(total % MINUTES_PER_DAY)
        }
    }

    /// User-facing rendering, with `24:00` shown as `00:00`
    pub fn display(self) -> String {
        if self.is_end_of_day() {
            Self::MIDNIGHT.to_string()
        } else {
            self.to_string()
        }
    }

    /// Local date-time of this time on `date`; `24:00` lands on the next day
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::default()) + Duration::minutes(i64::from(self.0))
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse an ISO calendar date (`YYYY-MM-DD`)
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, TimeParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeParseError::Date(s.to_string()))
}
