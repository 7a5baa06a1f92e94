//! Data models for fixtures, tool arguments, and responses.

/// Phone verification request/result
pub mod customer;
/// `{ results: [...] }` response wrapper
pub mod envelope;
/// Exchange rate table entries
pub mod exchange_rate;
/// Tool-call argument extraction
pub mod tool_call;
/// Transaction records and status lookup request
pub mod transaction;
