//! Exchange rate models.
//!
//! This module defines:
//! - `ExchangeRateEntry`: One row of the rate table, returned verbatim on success
//! - `CountryAlias`: Alternative spelling resolved before the table lookup
//! - `ExchangeRateRequest`: Arguments of the `get_exchange_rate` tool

use serde::{Deserialize, Serialize};

use super::tool_call::lenient_string;

/// One entry of the exchange rate table.
///
/// # JSON Example
///
/// ```json
/// {
///   "country": "India",
///   "currency": "Indian Rupee",
///   "currencyCode": "INR",
///   "rate": "293.005",
///   "commission": 1.25
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateEntry {
    /// Country name, unique across the table under normalized-text comparison
    pub country: String,

    /// Currency name, e.g. "Indian Rupee"
    pub currency: String,

    /// ISO-like currency code, e.g. "INR"
    pub currency_code: String,

    /// Quoted rate as displayed to callers.
    ///
    /// Usually a decimal such as "293.005", but some entries carry a
    /// descriptive formula ("For 1000 EGP = 6.588 KWD"). Never parse it.
    pub rate: String,

    /// Commission charged in KWD
    pub commission: f64,
}

/// Maps a caller's spelling of a country onto the table's key.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryAlias {
    pub alias: String,
    pub country: String,
}

/// Arguments of `POST /get-exchange-rate`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExchangeRateRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub country: Option<String>,
}
