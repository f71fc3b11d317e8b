//! API handlers for PadelSpot REST endpoints

pub mod health;
pub mod openapi;
pub mod pricing;
pub mod reservations;
pub mod settings;
pub mod slots;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Settings
        .route("/settings", get(settings::get_settings))
        // Pricing
        .route("/pricing/rates", get(pricing::get_rates))
        .route("/pricing/rate", get(pricing::get_rate))
        .route("/pricing/quote", post(pricing::quote))
        // Slots
        .route("/slots", get(slots::list_slots))
        .route("/slots/day", get(slots::day_slots))
        .route("/slots/fit", post(slots::fit_slots))
        // Reservation rules
        .route("/reservations/cancellation", post(reservations::check_cancellation))
        .route("/reservations/eligibility", post(reservations::check_eligibility))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
