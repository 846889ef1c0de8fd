//! sec-api.io query client.

use crate::{
    Result,
    error::{SecError, load_env_file},
};
use mispricing_traits::{FilingRecord, FilingsByType, form};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

/// Base URL for the sec-api.io full-text query API.
const SEC_API_BASE_URL: &str = "https://api.sec-api.io";

/// A filing search request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingQuery {
    query: String,
    from: String,
    size: String,
    sort: Vec<serde_json::Value>,
}

impl FilingQuery {
    /// Search the tracked form types for `ticker`, newest first.
    #[must_use]
    pub fn tracked_forms(ticker: &str, size: u32) -> Self {
        let forms = form::TRACKED
            .iter()
            .map(|f| format!("formType:\"{f}\""))
            .collect::<Vec<_>>()
            .join(" OR ");

        Self {
            query: format!("ticker:{} AND ({forms})", ticker.to_uppercase()),
            from: "0".to_string(),
            size: size.to_string(),
            sort: vec![serde_json::json!({ "filedAt": { "order": "desc" } })],
        }
    }

    /// The query string.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    filings: Vec<FilingRecord>,
}

/// sec-api.io client.
#[derive(Debug, Clone)]
pub struct SecClient {
    client: Client,
    api_key: String,
}

impl SecClient {
    /// Create a new client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new client from the `SEC_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns [`SecError::MissingApiKey`] if the variable is not set, or
    /// [`SecError::Env`] if a `.env` file exists but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        load_env_file()?;

        let api_key = env::var("SEC_API_KEY").map_err(|_| SecError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    fn url(&self) -> String {
        format!("{SEC_API_BASE_URL}?token={}", self.api_key)
    }

    /// Run a filing search and return the raw records.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn search(&self, query: &FilingQuery) -> Result<Vec<FilingRecord>> {
        tracing::debug!(query = query.query(), "sec-api.io request");
        let response = self.client.post(self.url()).json(query).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SecError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(SecError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        let parsed: QueryResponse = serde_json::from_str(&text)?;
        Ok(parsed.filings)
    }

    /// Fetch the most recent tracked filings for `ticker`, grouped by form
    /// type.
    ///
    /// Every tracked bucket is present in the result, possibly empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails.
    pub async fn latest_filings(&self, ticker: &str, size: u32) -> Result<FilingsByType> {
        let filings = self
            .search(&FilingQuery::tracked_forms(ticker, size))
            .await?;
        let organized = FilingsByType::organize(filings);
        tracing::debug!(ticker, count = organized.len(), "Fetched filings");
        Ok(organized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = SecClient::new("test_key");
        assert_eq!(client.url(), "https://api.sec-api.io?token=test_key");
    }

    #[test]
    fn test_tracked_forms_query() {
        let query = FilingQuery::tracked_forms("aapl", 20);
        assert_eq!(
            query.query(),
            r#"ticker:AAPL AND (formType:"10-K" OR formType:"10-Q" OR formType:"4" OR formType:"SC 13D")"#
        );

        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(body["from"], "0");
        assert_eq!(body["size"], "20");
        assert_eq!(body["sort"][0]["filedAt"]["order"], "desc");
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "total": {"value": 2},
            "filings": [
                {"id": "a1", "formType": "4", "filedAt": "2024-05-01T16:05:00-04:00",
                 "description": "Statement of changes in beneficial ownership"},
                {"id": "a2", "formType": "8-K", "filedAt": "2024-04-20T09:00:00-04:00"}
            ]
        }"#;
        let parsed: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.filings.len(), 2);

        let organized = FilingsByType::organize(parsed.filings);
        assert_eq!(organized.bucket(form::INSIDER_TRANSACTION).len(), 1);
        assert!(organized.bucket("8-K").is_empty());
    }
}
