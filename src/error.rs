//! Error types and HTTP error response handling.
//!
//! This module defines every failure a webhook call can report and how it is
//! rendered. Domain failures (unknown country, no transaction, KYC mismatch)
//! are answered with HTTP 200 and a `success: false` envelope, because the
//! tool-calling platform reads the envelope rather than the status code. Only
//! authentication and malformed bodies use non-200 statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};

use crate::models::{
    envelope::{Envelope, Failure},
    transaction::KycField,
};

/// Application-wide error type.
///
/// Each variant maps to one `errorCode` in the response envelope. The
/// `Display` text is the human-readable `message`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// No country argument was supplied.
    #[error("Country parameter required")]
    MissingCountry,

    /// No rate entry matched; echoes the caller's original input.
    #[error("Country not found")]
    CountryNotFound { country: String },

    /// Neither a phone number nor a reference + name pair was supplied.
    #[error("Provide phoneNumber OR transactionReference + customerName")]
    MissingLookupFields,

    /// The selected lookup mode found no transaction.
    #[error("No transactions found")]
    TransactionNotFound,

    /// One or more supplied identity fields disagree with the record.
    #[error("KYC details do not match our records")]
    KycMismatch { mismatched_fields: Vec<KycField> },

    /// `x-api-key` is missing or wrong while an API key is configured.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    Unauthorized,

    /// Request body is not valid JSON.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidRequest(String),
}

impl AppError {
    /// Machine-readable `errorCode` for the envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingCountry => "MISSING_COUNTRY",
            AppError::CountryNotFound { .. } => "COUNTRY_NOT_FOUND",
            AppError::MissingLookupFields => "MISSING_LOOKUP_FIELDS",
            AppError::TransactionNotFound => "TXN_NOT_FOUND",
            AppError::KycMismatch { .. } => "KYC_MISMATCH",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::OK,
        }
    }

    /// Error-specific fields merged into the result object.
    fn extra(&self) -> Map<String, Value> {
        let mut extra = Map::new();

        match self {
            AppError::CountryNotFound { country } => {
                extra.insert("country".to_string(), json!(country));
            }
            AppError::KycMismatch { mismatched_fields } => {
                extra.insert("mismatchedFields".to_string(), json!(mismatched_fields));
            }
            _ => {}
        }

        extra
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "results": [
///     {
///       "success": false,
///       "errorCode": "KYC_MISMATCH",
///       "message": "KYC details do not match our records",
///       "mismatchedFields": ["nationality"]
///     }
///   ]
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Unauthorized` → 401 Unauthorized
/// - `InvalidRequest` → 400 Bad Request
/// - everything else → 200 OK
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(Envelope::single(Failure {
            success: false,
            error_code: self.code(),
            message: self.to_string(),
            extra: self.extra(),
        }));

        (self.status(), body).into_response()
    }
}
