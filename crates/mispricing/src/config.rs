//! Runtime configuration from the environment.

use mispricing_analysis::ValuationConfig;
use mispricing_traits::{MispricingError, Result};
use std::env;

/// Default number of annual statements fetched per kind.
pub const DEFAULT_STATEMENT_LIMIT: u32 = 10;
/// Default number of news headlines fetched.
pub const DEFAULT_NEWS_LIMIT: u32 = 50;
/// Default number of filings requested from the search API.
pub const DEFAULT_FILING_LIMIT: u32 = 20;

/// Settings for fetching and analyzing one company.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Financial Modeling Prep API key.
    pub fmp_api_key: Option<String>,
    /// sec-api.io API key. Without it the filing buckets stay empty.
    pub sec_api_key: Option<String>,
    /// Annual statements fetched per kind.
    pub statement_limit: u32,
    /// News headlines fetched.
    pub news_limit: u32,
    /// Filings requested.
    pub filing_limit: u32,
    /// Valuation parameters.
    pub valuation: ValuationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fmp_api_key: None,
            sec_api_key: None,
            statement_limit: DEFAULT_STATEMENT_LIMIT,
            news_limit: DEFAULT_NEWS_LIMIT,
            filing_limit: DEFAULT_FILING_LIMIT,
            valuation: ValuationConfig::default(),
        }
    }
}

impl Config {
    /// Read configuration from the environment, loading `.env` if present.
    ///
    /// Recognized variables: `FMP_API_KEY`, `SEC_API_KEY` and
    /// `MISPRICING_COST_OF_CAPITAL`. Keys may be absent here; fetching fails
    /// later if the FMP key is missing.
    ///
    /// # Errors
    ///
    /// Returns [`MispricingError::Config`] if a `.env` file exists but cannot
    /// be parsed, or if `MISPRICING_COST_OF_CAPITAL` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        env_file_outcome(dotenvy::dotenv().map(drop))?;

        let mut config = Self {
            fmp_api_key: non_empty_var("FMP_API_KEY"),
            sec_api_key: non_empty_var("SEC_API_KEY"),
            ..Self::default()
        };

        if let Some(raw) = non_empty_var("MISPRICING_COST_OF_CAPITAL") {
            config.valuation.cost_of_capital = parse_rate(&raw)?;
        }

        Ok(config)
    }

    /// The FMP API key.
    ///
    /// # Errors
    ///
    /// Returns [`MispricingError::Config`] if no key is configured.
    pub fn require_fmp_key(&self) -> Result<&str> {
        self.fmp_api_key
            .as_deref()
            .ok_or_else(|| MispricingError::Config("FMP_API_KEY not set".to_string()))
    }
}

fn env_file_outcome(result: std::result::Result<(), dotenvy::Error>) -> Result<()> {
    match result {
        Err(e) if !e.not_found() => Err(MispricingError::Config(format!(
            "unreadable .env file: {e}"
        ))),
        _ => Ok(()),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_rate(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| {
            MispricingError::Config(format!("MISPRICING_COST_OF_CAPITAL is not a number: {raw}"))
        })
}
