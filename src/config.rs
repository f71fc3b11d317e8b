//! Configuration management for PadelSpot server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::time::{ClockTime, MINUTES_PER_DAY};

/// Upper bound for any configured rate, so a full day plus racket fits in `u32`
pub const MAX_RATE: u32 = 1_000_000;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Hourly rates per day-type and band, in whole currency units
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PricingConfig {
    pub weekday_day: u32,
    pub weekday_evening: u32,
    pub weekend_day: u32,
    pub weekend_evening: u32,
    /// Flat surcharge for racket rental, added once per booking
    pub racket: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BookingConfig {
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub slot_duration_minutes: u32,
    pub allowed_durations: Vec<u32>,
    /// How many days ahead (from today) a court can be booked
    pub max_days_ahead: u32,
    /// Bookings can be cancelled up to this many hours before start
    pub cancel_window_hours: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub pricing: PricingConfig,
    pub booking: BookingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // PADELSPOT_PRICING__WEEKEND_EVENING=3200
            .add_source(
                Environment::with_prefix("PADELSPOT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check the booking window is usable before the server starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        let booking = &self.booking;
        let start = ClockTime::parse(&booking.working_hours_start)
            .map_err(|e| ConfigError::Message(format!("booking.working_hours_start: {}", e)))?;
        let end = ClockTime::parse(&booking.working_hours_end)
            .map_err(|e| ConfigError::Message(format!("booking.working_hours_end: {}", e)))?;

        if start >= end {
            return Err(ConfigError::Message(format!(
                "working hours are empty: {} - {}",
                start, end
            )));
        }
        if booking.slot_duration_minutes == 0 {
            return Err(ConfigError::Message(
                "booking.slot_duration_minutes must be positive".to_string(),
            ));
        }
        if booking.slot_duration_minutes > MINUTES_PER_DAY {
            return Err(ConfigError::Message(format!(
                "booking.slot_duration_minutes must not exceed {}",
                MINUTES_PER_DAY
            )));
        }
        if booking
            .allowed_durations
            .iter()
            .any(|d| *d == 0 || *d > MINUTES_PER_DAY)
        {
            return Err(ConfigError::Message(format!(
                "booking.allowed_durations must be between 1 and {}",
                MINUTES_PER_DAY
            )));
        }
        if !booking.allowed_durations.contains(&booking.slot_duration_minutes) {
            return Err(ConfigError::Message(format!(
                "default slot duration {} is not in allowed durations {:?}",
                booking.slot_duration_minutes, booking.allowed_durations
            )));
        }

        let pricing = &self.pricing;
        let rates = [
            ("weekday_day", pricing.weekday_day),
            ("weekday_evening", pricing.weekday_evening),
            ("weekend_day", pricing.weekend_day),
            ("weekend_evening", pricing.weekend_evening),
            ("racket", pricing.racket),
        ];
        if let Some((name, rate)) = rates.iter().find(|(_, rate)| *rate > MAX_RATE) {
            return Err(ConfigError::Message(format!(
                "pricing.{} = {} exceeds {}",
                name, rate, MAX_RATE
            )));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            weekday_day: 2000,
            weekday_evening: 2400,
            weekend_day: 2600,
            weekend_evening: 3000,
            racket: 300,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            working_hours_start: "09:00".to_string(),
            working_hours_end: "24:00".to_string(),
            slot_duration_minutes: 60,
            allowed_durations: vec![60, 120],
            max_days_ahead: 30,
            cancel_window_hours: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_window() {
        let mut config = AppConfig::default();
        config.booking.working_hours_start = "22:00".to_string();
        config.booking.working_hours_end = "21:00".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_time() {
        let mut config = AppConfig::default();
        config.booking.working_hours_end = "25:00".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unlisted_default_duration() {
        let mut config = AppConfig::default();
        config.booking.slot_duration_minutes = 90;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_durations_longer_than_a_day() {
        let mut config = AppConfig::default();
        config.booking.slot_duration_minutes = u32::MAX;
        config.booking.allowed_durations = vec![60, u32::MAX];
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.booking.allowed_durations = vec![60, MINUTES_PER_DAY + 1];
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.booking.slot_duration_minutes = MINUTES_PER_DAY;
        config.booking.allowed_durations = vec![60, MINUTES_PER_DAY];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_rates() {
        let mut config = AppConfig::default();
        config.pricing.weekend_evening = u32::MAX;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.pricing.racket = MAX_RATE + 1;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.pricing.weekday_day = MAX_RATE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides_file_values() {
        env::set_var("PADELSPOT_PRICING__RACKET", "450");
        env::set_var("PADELSPOT_BOOKING__MAX_DAYS_AHEAD", "14");
        let loaded = AppConfig::load();
        env::remove_var("PADELSPOT_PRICING__RACKET");
        env::remove_var("PADELSPOT_BOOKING__MAX_DAYS_AHEAD");

        let config = loaded.unwrap();
        assert_eq!(config.pricing.racket, 450);
        assert_eq!(config.booking.max_days_ahead, 14);
        assert_eq!(config.pricing.weekend_evening, 3000);
    }
}
