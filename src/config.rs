//! Application configuration management.
//!
//! Configuration is read from environment variables with the `envy` crate,
//! after an optional `.env` file has been loaded.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `PORT` (optional): HTTP server port, defaults to 3000
/// - `API_KEY` (optional): required value of the `x-api-key` header; when unset
///   or empty every request is accepted
/// - `FIXTURES_PATH` (optional): JSON fixture file; the built-in sample data is
///   used when unset
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    api_key: Option<String>,

    #[serde(default)]
    pub fixtures_path: Option<PathBuf>,
}

/// Default port if PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads `.env` first if present (does nothing if not found).
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed into its expected type,
    /// e.g. a non-numeric `PORT`.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }

    /// The configured API key, treating an empty value as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}
