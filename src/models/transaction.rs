//! Transaction models and the `get_transaction_status` request types.
//!
//! This module defines:
//! - `Transaction`: A fixture record, returned in full on successful lookup
//! - `TransactionStatusRequest`: Arguments of the `get_transaction_status` tool
//! - `KycCheck` / `KycField`: Optional identity fields and the names reported on mismatch

use serde::{Deserialize, Serialize};

use super::tool_call::lenient_string;

/// A remittance transaction record.
///
/// Records are read-only sample data. The table order is significant: lookups
/// by phone number treat the last matching record as the most recent one.
///
/// # JSON Example
///
/// ```json
/// {
///   "transactionReference": "7603475",
///   "customerName": "Nazmul",
///   "mobileNumber": "96550480304",
///   "transactionDate": "November 4th, 2025",
///   "amountKWD": 300,
///   "beneficiaryName": "Nazmul",
///   "beneficiaryBank": "Agrani",
///   "nationality": "Bangladesh",
///   "status": "Transaction rejected",
///   "channel": "Branch"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Reference number quoted to the customer
    pub transaction_reference: String,

    pub customer_name: String,

    /// Customer phone, digits with or without country code
    pub mobile_number: String,

    /// Display date, never parsed or sorted on
    pub transaction_date: String,

    #[serde(rename = "amountKWD")]
    pub amount_kwd: f64,

    pub beneficiary_name: String,
    pub beneficiary_bank: String,
    pub nationality: String,

    /// Free-text processing status
    pub status: String,

    /// Where the transaction was placed (Online, Branch, Kiosk)
    pub channel: String,
}

/// Arguments of `POST /get-transaction-status`.
///
/// Either `phone_number` or both `transaction_reference` and `customer_name`
/// must be present. The remaining fields are optional identity checks.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionStatusRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub phone_number: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub transaction_reference: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub customer_name: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub nationality: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub beneficiary_name: Option<String>,

    #[serde(deserialize_with = "lenient_string")]
    pub beneficiary_bank: Option<String>,
}

impl TransactionStatusRequest {
    /// Split off the identity fields.
    pub fn kyc(&self) -> KycCheck {
        KycCheck {
            nationality: self.nationality.clone(),
            beneficiary_name: self.beneficiary_name.clone(),
            beneficiary_bank: self.beneficiary_bank.clone(),
        }
    }
}

/// Identity fields a caller may supply to gate disclosure of a transaction.
///
/// Only supplied fields are checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KycCheck {
    pub nationality: Option<String>,
    pub beneficiary_name: Option<String>,
    pub beneficiary_bank: Option<String>,
}

impl KycCheck {
    pub fn is_empty(&self) -> bool {
        self.nationality.is_none()
            && self.beneficiary_name.is_none()
            && self.beneficiary_bank.is_none()
    }
}

/// Identity field name as reported in `mismatchedFields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KycField {
    Nationality,
    BeneficiaryName,
    BeneficiaryBank,
}
