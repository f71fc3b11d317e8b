//! Business logic services

pub mod pricing;
pub mod reservations;
pub mod slots;

use crate::{config::AppConfig, error::AppResult, models::RateTable};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub pricing: pricing::PricingService,
    pub slots: slots::SlotsService,
    pub reservations: reservations::ReservationsService,
}

impl Services {
    /// Create all services from the loaded configuration
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let pricing = pricing::PricingService::new(RateTable::from(&config.pricing));

        Ok(Self {
            slots: slots::SlotsService::new(&config.booking, pricing.clone())?,
            reservations: reservations::ReservationsService::new(&config.booking),
            pricing,
        })
    }
}
