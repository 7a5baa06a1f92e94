//! Exchange Webhook Server - Main Application Entry Point
//!
//! A webhook backend for a voice-assistant tool-calling platform. It answers
//! three tools from read-only, in-memory data: exchange rate by country, phone
//! number verification, and transaction status with optional KYC checks.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Data**: Static fixture tables, loaded once and shared read-only
//! - **Authentication**: Optional static API key in `x-api-key`
//! - **Format**: JSON requests, `{ results: [...] }` responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Load fixture tables (built-in sample data or `FIXTURES_PATH`)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod config;
mod error;
mod fixtures;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

use crate::{fixtures::Fixtures, services::lookup_service::LookupService, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load lookup tables
    let fixtures = match &config.fixtures_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading fixtures from file");
            Fixtures::from_file(path)?
        }
        None => Fixtures::sample()?,
    };
    tracing::info!(
        exchange_rates = fixtures.exchange_rates.len(),
        transactions = fixtures.transactions.len(),
        "Fixtures loaded"
    );

    if config.api_key().is_none() {
        tracing::warn!("API_KEY not set, accepting all requests (demo mode)");
    }

    let state = AppState::new(LookupService::new(fixtures), config.api_key());
    let app = routes::build_router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
