//! Router construction.
//!
//! Webhook routes sit behind the API key middleware; the health check and CORS
//! preflight requests do not.

use axum::{
    Router,
    http::{HeaderName, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers,
    middleware::auth::{API_KEY_HEADER, require_api_key},
    state::AppState,
};

pub const EXCHANGE_RATE_PATH: &str = "/get-exchange-rate";
pub const VERIFY_PHONE_PATH: &str = "/verify-phone-number";
pub const TRANSACTION_STATUS_PATH: &str = "/get-transaction-status";

/// Webhook endpoints, as advertised by the health check.
pub const TOOL_ENDPOINTS: &[&str] = &[
    EXCHANGE_RATE_PATH,
    VERIFY_PHONE_PATH,
    TRANSACTION_STATUS_PATH,
];

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    // Tool endpoints, protected by the API key check when one is configured
    let webhook_routes = Router::new()
        .route(
            EXCHANGE_RATE_PATH,
            post(handlers::exchange_rates::get_exchange_rate),
        )
        .route(
            VERIFY_PHONE_PATH,
            post(handlers::customers::verify_phone_number),
        )
        .route(
            TRANSACTION_STATUS_PATH,
            post(handlers::transactions::get_transaction_status),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        // Public routes
        .route("/", get(handlers::health::health_check))
        .route("/health", get(handlers::health::health_check))
        .merge(webhook_routes)
        .layer(TraceLayer::new_for_http())
        // Outermost, so OPTIONS preflights are answered before auth runs
        .layer(cors_layer())
        .with_state(state)
}

/// Allow any origin to call the webhooks.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(API_KEY_HEADER),
        ])
}
