//! Health check endpoint for service monitoring.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::envelope::{ApiResponse, ok},
    routes::TOOL_ENDPOINTS,
};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: &'static str,

    /// Webhook endpoints this server answers
    pub endpoints: &'static [&'static str],

    pub version: &'static str,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler, served on `/` and `/health`.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "results": [{
///     "success": true,
///     "status": "Exchange webhook server running",
///     "endpoints": ["/get-exchange-rate", "/verify-phone-number", "/get-transaction-status"],
///     "version": "0.1.0",
///     "timestamp": "2025-11-07T09:00:00Z"
///   }]
/// }
/// ```
pub async fn health_check() -> ApiResponse<HealthResponse> {
    ok(HealthResponse {
        status: "Exchange webhook server running",
        endpoints: TOOL_ENDPOINTS,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}
