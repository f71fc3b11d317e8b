//! Data models for PadelSpot

pub mod pricing;
pub mod reservation;
pub mod slot;
pub mod time;

// Re-export commonly used types
pub use pricing::{Band, DayType, PriceQuote, RateTable};
pub use reservation::ReservationStatus;
pub use slot::{DaySlot, TimeSlot};
pub use time::ClockTime;
