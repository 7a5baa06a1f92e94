//! Exchange rate HTTP handler.
//!
//! - POST /get-exchange-rate - Look up the rate for a country

use axum::extract::State;

use crate::{
    error::AppError,
    handlers::tool_args::ToolArgs,
    models::{
        envelope::{ApiResponse, ok},
        exchange_rate::{ExchangeRateEntry, ExchangeRateRequest},
    },
    state::AppState,
};

/// Look up an exchange rate by country name.
///
/// # Request Body
///
/// ```json
/// { "country": "india" }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "results": [{
///     "success": true,
///     "country": "India",
///     "currency": "Indian Rupee",
///     "currencyCode": "INR",
///     "rate": "293.005",
///     "commission": 1.25
///   }]
/// }
/// ```
///
/// Fails with `MISSING_COUNTRY` or `COUNTRY_NOT_FOUND`.
pub async fn get_exchange_rate(
    State(state): State<AppState>,
    ToolArgs(request): ToolArgs<ExchangeRateRequest>,
) -> Result<ApiResponse<ExchangeRateEntry>, AppError> {
    let entry = state.lookup.find_country_rate(request.country.as_deref())?;

    Ok(ok(entry.clone()))
}
