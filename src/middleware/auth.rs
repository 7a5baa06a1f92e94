//! API key authentication middleware.
//!
//! When an API key is configured, every webhook call must carry it in the
//! `x-api-key` header. When none is configured the service runs in demo mode
//! and accepts all requests.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

use crate::{error::AppError, state::AppState};

/// Header the tool-calling platform sends the key in.
pub const API_KEY_HEADER: &str = "x-api-key";

/// SHA-256 digest of the configured API key (64 hex characters).
///
/// The plain key is hashed once at startup; each request's header is hashed
/// the same way and the digests are compared.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyDigest(String);

impl ApiKeyDigest {
    pub fn from_key(key: &str) -> Self {
        Self(hash_key(key))
    }

    pub fn matches(&self, provided: &str) -> bool {
        self.0 == hash_key(provided)
    }
}

impl std::fmt::Debug for ApiKeyDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKeyDigest(..)")
    }
}

fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());

    hex::encode(hasher.finalize())
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. If no key is configured, call the next handler
/// 2. Read the `x-api-key` header
/// 3. Hash it and compare with the configured digest
/// 4. On mismatch or missing header, return 401 with an `UNAUTHORIZED` envelope
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = &state.api_key {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|h| h.to_str().ok());

        if !provided.is_some_and(|key| expected.matches(key)) {
            tracing::warn!(
                path = %request.uri().path(),
                header_present = provided.is_some(),
                "Rejected webhook call with invalid API key"
            );
            return Err(AppError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}
