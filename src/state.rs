//! Shared request state.

use std::sync::Arc;

use crate::{middleware::auth::ApiKeyDigest, services::lookup_service::LookupService};

/// State handed to every handler and middleware via axum's `State` extractor.
///
/// Cloned per request; the lookup tables themselves are shared, never copied.
#[derive(Debug, Clone)]
pub struct AppState {
    pub lookup: Arc<LookupService>,

    /// Digest of the configured API key, `None` in demo mode
    pub api_key: Option<ApiKeyDigest>,
}

impl AppState {
    pub fn new(lookup: LookupService, api_key: Option<&str>) -> Self {
        Self {
            lookup: Arc::new(lookup),
            api_key: api_key.map(ApiKeyDigest::from_key),
        }
    }
}
