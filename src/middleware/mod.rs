//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit a request,
//! e.g. reject it when the API key is wrong.

/// Static API key check
pub mod auth;
