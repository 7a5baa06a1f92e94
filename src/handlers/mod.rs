//! HTTP request handlers (route handlers).
//!
//! Each webhook handler:
//! 1. Extracts tool arguments from either accepted payload shape
//! 2. Calls the lookup service
//! 3. Wraps the result in the `{ results: [...] }` envelope

/// Phone-number verification endpoint
pub mod customers;
/// Exchange rate endpoint
pub mod exchange_rates;
/// Health check endpoint
pub mod health;
/// Tool-call argument extractor
pub mod tool_args;
/// Transaction status endpoint
pub mod transactions;
