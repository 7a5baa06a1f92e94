//! Business logic services.
//!
//! Services hold the lookup logic, separated from HTTP handlers so it can be
//! exercised without a router.

pub mod lookup_service;
pub mod normalize;
