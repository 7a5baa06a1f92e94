//! Extractor for tool-call arguments.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::AppError,
    models::tool_call::{extract_arguments, parse_arguments},
};

/// Typed tool arguments read from the request body.
///
/// Works like `Json<T>` but accepts both the nested tool-call shape and a flat
/// body, does not insist on a `Content-Type` header, and treats an empty body
/// as `{}`.
///
/// # Rejections
///
/// A body that is not valid JSON is rejected with `AppError::InvalidRequest`.
#[derive(Debug)]
pub struct ToolArgs<T>(pub T);

impl<S, T> FromRequest<S> for ToolArgs<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| AppError::InvalidRequest(format!("Invalid JSON body: {e}")))?
        };

        Ok(ToolArgs(parse_arguments(extract_arguments(body))))
    }
}
