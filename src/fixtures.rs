//! Read-only lookup tables and their loading.
//!
//! The service answers every query from three in-memory tables: exchange rates,
//! country aliases, and transactions. They are loaded once at startup, either
//! from the sample data compiled into the binary or from a JSON file named by
//! `FIXTURES_PATH`, and are never mutated afterwards.
//!
//! # File Format
//!
//! ```json
//! {
//!   "exchangeRates": [ { "country": "India", "currency": "Indian Rupee", "currencyCode": "INR", "rate": "293.005", "commission": 1.25 } ],
//!   "countryAliases": { "usa": "United States" },
//!   "transactions": [ { "transactionReference": "7603475", "customerName": "Nazmul", ... } ]
//! }
//! ```

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    models::{
        exchange_rate::{CountryAlias, ExchangeRateEntry},
        transaction::Transaction,
    },
    services::normalize::normalize_text,
};

/// Sample data set, embedded at compile time.
const SAMPLE_FIXTURES: &str = include_str!("../data/sample_fixtures.json");

/// Errors raised while loading fixtures. All of them abort startup.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixtures from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two rate entries normalize to the same country name, which would make
    /// lookups ambiguous.
    #[error("Duplicate exchange rate entry for country \"{0}\"")]
    DuplicateCountry(String),
}

/// On-disk shape of a fixture document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureDocument {
    exchange_rates: Vec<ExchangeRateEntry>,

    #[serde(default)]
    country_aliases: BTreeMap<String, String>,

    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// The complete set of lookup tables.
#[derive(Debug, Clone)]
pub struct Fixtures {
    /// Rate entries, in table order
    pub exchange_rates: Vec<ExchangeRateEntry>,

    pub country_aliases: Vec<CountryAlias>,

    /// Transactions in insertion order; later entries are treated as more recent
    pub transactions: Vec<Transaction>,
}

impl Fixtures {
    /// Built-in sample data.
    pub fn sample() -> Result<Self, FixtureError> {
        Self::from_json(SAMPLE_FIXTURES)
    }

    /// Load and validate a fixture document from disk.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents)
    }

    /// Parse and validate a fixture document.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let document: FixtureDocument = serde_json::from_str(json)?;

        let fixtures = Self {
            exchange_rates: document.exchange_rates,
            country_aliases: document
                .country_aliases
                .into_iter()
                .map(|(alias, country)| CountryAlias { alias, country })
                .collect(),
            transactions: document.transactions,
        };

        fixtures.validate()?;

        Ok(fixtures)
    }

    fn validate(&self) -> Result<(), FixtureError> {
        let mut seen = HashSet::new();

        for entry in &self.exchange_rates {
            if !seen.insert(normalize_text(&entry.country)) {
                return Err(FixtureError::DuplicateCountry(entry.country.clone()));
            }
        }

        Ok(())
    }
}
