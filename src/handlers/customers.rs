//! Customer verification HTTP handler.
//!
//! - POST /verify-phone-number - Check whether a phone number belongs to a customer

use axum::extract::State;

use crate::{
    handlers::tool_args::ToolArgs,
    models::{
        customer::{PhoneVerification, PhoneVerificationRequest},
        envelope::{ApiResponse, ok},
    },
    state::AppState,
};

/// Verify a caller's phone number.
///
/// Never fails on missing input; an absent or unknown number yields
/// `verified: false`.
///
/// # Response (200)
///
/// ```json
/// { "results": [{ "success": true, "verified": true, "customerName": "Kareem", "hasTransactions": true }] }
/// ```
pub async fn verify_phone_number(
    State(state): State<AppState>,
    ToolArgs(request): ToolArgs<PhoneVerificationRequest>,
) -> ApiResponse<PhoneVerification> {
    ok(state.lookup.verify_phone(request.phone_number.as_deref()))
}
