//! Phone-number verification models.

use serde::{Deserialize, Serialize};

use super::tool_call::lenient_string;

/// Arguments of `POST /verify-phone-number`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneVerificationRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub phone_number: Option<String>,
}

/// Result of a phone-number verification.
///
/// Only the customer's name is disclosed, never transaction details.
///
/// # JSON Example
///
/// ```json
/// { "verified": true, "customerName": "Kareem", "hasTransactions": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneVerification {
    pub verified: bool,
    pub customer_name: Option<String>,
    pub has_transactions: bool,
}

impl PhoneVerification {
    /// Negative result, used both for unknown numbers and missing input.
    pub fn unverified() -> Self {
        Self {
            verified: false,
            customer_name: None,
            has_transactions: false,
        }
    }
}
