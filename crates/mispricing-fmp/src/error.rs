//! Failures surfaced by [`FmpClient`](crate::FmpClient).

use thiserror::Error;

/// Everything that can go wrong talking to Financial Modeling Prep.
#[derive(Debug, Error)]
pub enum FmpError {
    /// `FMP_API_KEY` is unset.
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// Transport failure.
    #[error("FMP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not match the expected record shape.
    #[error("unexpected FMP payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success status, or an `"Error Message"` body.
    #[error("FMP rejected the request: {0}")]
    Api(String),

    /// HTTP 429 from FMP.
    #[error("FMP rate limit reached; retry later or upgrade the API plan")]
    RateLimitExceeded,

    /// Profile or quote lookups came back empty.
    #[error("unknown ticker: {0}")]
    SymbolNotFound(String),

    /// An endpoint answered with an empty list.
    #[error("FMP returned no records for {0}")]
    NoData(String),

    /// A `.env` file exists but could not be read or parsed.
    #[error("unreadable .env file: {0}")]
    Env(#[from] dotenvy::Error),
}

/// Load `.env` into the process environment. A missing file is not an error.
pub(crate) fn load_env_file() -> Result<(), FmpError> {
    env_file_outcome(dotenvy::dotenv().map(drop))
}

fn env_file_outcome(result: Result<(), dotenvy::Error>) -> Result<(), FmpError> {
    match result {
        Err(e) if !e.not_found() => Err(e.into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_env_file_is_ignored() {
        let missing = dotenvy::Error::Io(io::Error::new(io::ErrorKind::NotFound, ".env"));
        assert!(env_file_outcome(Err(missing)).is_ok());
        assert!(env_file_outcome(Ok(())).is_ok());
    }

    #[test]
    fn test_malformed_env_file_is_reported() {
        let malformed = dotenvy::Error::LineParse("FMP_API_KEY='abc".to_string(), 12);
        let err = env_file_outcome(Err(malformed)).unwrap_err();
        assert!(matches!(err, FmpError::Env(_)));
        assert!(err.to_string().starts_with("unreadable .env file"));
    }

    #[test]
    fn test_messages_name_the_provider() {
        assert_eq!(
            FmpError::RateLimitExceeded.to_string(),
            "FMP rate limit reached; retry later or upgrade the API plan"
        );
        assert_eq!(
            FmpError::NoData("ACME financial statements".to_string()).to_string(),
            "FMP returned no records for ACME financial statements"
        );
    }
}
