//! Response envelope shared by every endpoint.
//!
//! The tool-calling platform expects a single result object wrapped in a
//! `results` array:
//!
//! ```json
//! { "results": [ { "success": true, "country": "India", "rate": "293.005" } ] }
//! ```
//!
//! Failures use the same wrapper with `success: false`, an `errorCode`, a
//! human-readable `message`, and optional error-specific fields.

use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

/// Wrapper holding exactly one result object.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub results: [T; 1],
}

impl<T> Envelope<T> {
    pub fn single(result: T) -> Self {
        Self { results: [result] }
    }
}

/// Successful result: `success: true` followed by the payload's own fields.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    pub success: bool,

    #[serde(flatten)]
    pub payload: T,
}

/// Failed result carrying a machine-readable error code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    pub success: bool,
    pub error_code: &'static str,
    pub message: String,

    /// Error-specific fields such as `country` or `mismatchedFields`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// JSON body returned by successful handlers.
pub type ApiResponse<T> = Json<Envelope<Success<T>>>;

/// Wrap a payload in a successful envelope.
pub fn ok<T: Serialize>(payload: T) -> ApiResponse<T> {
    Json(Envelope::single(Success {
        success: true,
        payload,
    }))
}
