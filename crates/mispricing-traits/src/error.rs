//! Error types for the mispricing workspace.
//!
//! The analysis functions themselves degrade to zero instead of failing, so
//! these errors only surface at the edges: tabular export, data retrieval and
//! configuration.

use thiserror::Error;

/// The main error type for mispricing operations.
#[derive(Debug, Error)]
pub enum MispricingError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// A required input series could not be assembled.
    #[error("Incomplete data: {0}")]
    IncompleteData(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for MispricingError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for MispricingError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for mispricing operations.
pub type Result<T> = std::result::Result<T, MispricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MispricingError::DataFetch("timeout".to_string());
        assert_eq!(err.to_string(), "Data fetch error: timeout");

        let err = MispricingError::IncompleteData("no balance sheets for AAPL".to_string());
        assert_eq!(err.to_string(), "Incomplete data: no balance sheets for AAPL");
    }

    #[test]
    fn test_error_from_str() {
        let err: MispricingError = "fail".into();
        assert!(matches!(err, MispricingError::Other(ref s) if s == "fail"));
    }
}
