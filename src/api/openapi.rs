//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, pricing, reservations, settings, slots};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PadelSpot API",
        version = "1.0.0",
        description = "Court pricing and slot calculation API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Settings
        settings::get_settings,
        // Pricing
        pricing::get_rates,
        pricing::get_rate,
        pricing::quote,
        // Slots
        slots::list_slots,
        slots::day_slots,
        slots::fit_slots,
        // Reservations
        reservations::check_cancellation,
        reservations::check_eligibility,
    ),
    components(
        schemas(
            // Pricing
            crate::models::pricing::DayType,
            crate::models::pricing::Band,
            crate::models::pricing::RateTable,
            crate::models::pricing::HourCharge,
            crate::models::pricing::PriceQuote,
            crate::models::pricing::QuoteRequest,
            crate::models::pricing::RateQuery,
            crate::models::pricing::RateResponse,
            crate::models::pricing::BandRate,
            crate::models::pricing::RatesResponse,
            // Slots
            crate::models::slot::TimeSlot,
            crate::models::slot::DaySlot,
            crate::models::slot::SlotQuery,
            crate::models::slot::DaySlotQuery,
            crate::models::slot::DaySlotsResponse,
            crate::models::slot::FitRequest,
            crate::models::slot::FitResponse,
            // Reservations
            crate::models::reservation::ReservationStatus,
            crate::models::reservation::CancellationRequest,
            crate::models::reservation::CancellationVerdict,
            crate::models::reservation::CancellationResponse,
            crate::models::reservation::EligibilityRequest,
            crate::models::reservation::EligibilityResponse,
            // Settings
            settings::SettingsResponse,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "settings", description = "Booking settings"),
        (name = "pricing", description = "Hourly rates and price quotes"),
        (name = "slots", description = "Slot generation"),
        (name = "reservations", description = "Reservation rules")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
