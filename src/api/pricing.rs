//! Pricing endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::pricing::{PriceQuote, QuoteRequest, RateQuery, RateResponse, RatesResponse},
};

/// Get the price list
#[utoipa::path(
    get,
    path = "/pricing/rates",
    tag = "pricing",
    responses(
        (status = 200, description = "Hourly rates per day type and band", body = RatesResponse)
    )
)]
pub async fn get_rates(State(state): State<crate::AppState>) -> Json<RatesResponse> {
    Json(state.services.pricing.price_list())
}

/// Get the hourly rate for an hour and day of week
#[utoipa::path(
    get,
    path = "/pricing/rate",
    tag = "pricing",
    params(RateQuery),
    responses(
        (status = 200, description = "Hourly rate", body = RateResponse),
        (status = 400, description = "Hour or day of week out of range", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_rate(
    State(state): State<crate::AppState>,
    Query(query): Query<RateQuery>,
) -> AppResult<Json<RateResponse>> {
    query.validate()?;
    Ok(Json(state.services.pricing.rate_for(query.hour, query.day_of_week)))
}

/// Quote the price of a booking
#[utoipa::path(
    post,
    path = "/pricing/quote",
    tag = "pricing",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Price quote", body = PriceQuote),
        (status = 400, description = "Invalid date, time or span", body = crate::error::ErrorResponse)
    )
)]
pub async fn quote(
    State(state): State<crate::AppState>,
    Json(request): Json<QuoteRequest>,
) -> AppResult<Json<PriceQuote>> {
    request.validate()?;
    let quote = state.services.pricing.quote_request(&request)?;
    Ok(Json(quote))
}
