//! Failures surfaced by [`SecClient`](crate::SecClient).

use thiserror::Error;

/// Errors that can occur when searching filings.
#[derive(Debug, Error)]
pub enum SecError {
    /// `SEC_API_KEY` is unset.
    #[error("SEC_API_KEY environment variable not set")]
    MissingApiKey,

    /// Transport failure.
    #[error("sec-api.io request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not a filings page.
    #[error("unexpected sec-api.io payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success status.
    #[error("sec-api.io error: {0}")]
    Api(String),

    /// HTTP 429.
    #[error("sec-api.io rate limit exceeded")]
    RateLimitExceeded,

    /// A `.env` file exists but could not be read or parsed.
    #[error("unreadable .env file: {0}")]
    Env(#[from] dotenvy::Error),
}

/// Load `.env` into the process environment, tolerating its absence.
pub(crate) fn load_env_file() -> Result<(), SecError> {
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => Err(e.into()),
        _ => Ok(()),
    }
}
