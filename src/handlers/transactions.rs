//! Transaction status HTTP handler.
//!
//! - POST /get-transaction-status - Latest transaction by phone, or one by reference + name

use axum::extract::State;

use crate::{
    error::AppError,
    handlers::tool_args::ToolArgs,
    models::{
        envelope::{ApiResponse, ok},
        transaction::{Transaction, TransactionStatusRequest},
    },
    state::AppState,
};

/// Fetch a transaction's status.
///
/// # Request Body
///
/// ```json
/// {
///   "phoneNumber": "96550480304",
///   "nationality": "Bangladesh"
/// }
/// ```
///
/// or
///
/// ```json
/// {
///   "transactionReference": "7603475",
///   "customerName": "Nazmul",
///   "beneficiaryBank": "Agrani"
/// }
/// ```
///
/// `nationality`, `beneficiaryName` and `beneficiaryBank` are optional
/// identity checks; each one supplied must match the record.
///
/// # Response (200)
///
/// The full transaction record, or `MISSING_LOOKUP_FIELDS`, `TXN_NOT_FOUND`,
/// or `KYC_MISMATCH` with `mismatchedFields`.
pub async fn get_transaction_status(
    State(state): State<AppState>,
    ToolArgs(request): ToolArgs<TransactionStatusRequest>,
) -> Result<ApiResponse<Transaction>, AppError> {
    let transaction = state.lookup.transaction_status(&request)?;

    Ok(ok(transaction.clone()))
}
