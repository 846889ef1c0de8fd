//! Company data retrieval.
//!
//! [`CompanyData`] is everything the analysis needs for one ticker, fully
//! materialized. It can be fetched live with [`fetch_company_data`] or
//! loaded from a saved JSON file.

use std::fmt::Display;

use mispricing_fmp::{CompanyProfile, FmpClient, FmpError, KeyMetrics, Period, Quote};
use mispricing_sec::SecClient;
use mispricing_traits::{
    BalanceSheet, CashFlowStatement, EnterpriseValue, FilingsByType, IncomeStatement,
    MispricingError, NewsArticle, Result,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Raw inputs for one company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    /// Upper-case ticker symbol.
    pub ticker: String,
    /// Company profile.
    #[serde(default)]
    pub profile: Option<CompanyProfile>,
    /// Latest quote.
    #[serde(default)]
    pub quote: Option<Quote>,
    /// Annual income statements, most recent first.
    #[serde(default)]
    pub income_statement: Vec<IncomeStatement>,
    /// Annual balance sheets, most recent first.
    #[serde(default)]
    pub balance_sheet: Vec<BalanceSheet>,
    /// Annual cash flow statements, most recent first.
    #[serde(default)]
    pub cash_flow_statement: Vec<CashFlowStatement>,
    /// Annual key metrics, most recent first.
    #[serde(default)]
    pub key_metrics: Vec<KeyMetrics>,
    /// Latest enterprise value snapshot.
    #[serde(default)]
    pub enterprise_value: Option<EnterpriseValue>,
    /// Recent news headlines.
    #[serde(default)]
    pub news: Vec<NewsArticle>,
    /// Recent filings grouped by form type.
    #[serde(default)]
    pub filings: FilingsByType,
}

impl CompanyData {
    /// Load saved company data from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MispricingError::InvalidData`] if the JSON does not match.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut data: Self = serde_json::from_str(json)
            .map_err(|e| MispricingError::InvalidData(format!("company data: {e}")))?;
        data.ticker = data.ticker.to_uppercase();
        Ok(data)
    }

    /// The company name from the profile, if known.
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.company_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// Fetch everything needed to analyze `ticker`.
///
/// All requests run concurrently. The three statement kinds are required:
/// if any fails or is empty the whole fetch fails. Every other input
/// degrades to empty with a warning.
///
/// # Errors
///
/// Returns [`MispricingError::Config`] without an FMP key,
/// [`MispricingError::IncompleteData`] if a statement kind comes back empty, or
/// [`MispricingError::DataFetch`] if the statements cannot be retrieved.
pub async fn fetch_company_data(config: &Config, ticker: &str) -> Result<CompanyData> {
    let ticker = ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(MispricingError::InvalidData(
            "ticker symbol is required".to_string(),
        ));
    }

    let fmp = FmpClient::new(config.require_fmp_key()?);
    let sec = config.sec_api_key.as_deref().map(SecClient::new);
    let filings = async {
        match &sec {
            Some(client) => client
                .latest_filings(&ticker, config.filing_limit)
                .await
                .map_err(|e| e.to_string()),
            None => Err("SEC_API_KEY not set".to_string()),
        }
    };

    tracing::info!(ticker = %ticker, "Fetching company data");
    let (statements, key_metrics, enterprise_value, profile, quote, news, filings) = tokio::join!(
        fmp.financial_statements(&ticker, Period::Annual, config.statement_limit),
        fmp.key_metrics(&ticker, Period::Annual, Some(config.statement_limit)),
        fmp.latest_enterprise_value(&ticker),
        fmp.profile(&ticker),
        fmp.quote(&ticker),
        fmp.stock_news(&ticker, config.news_limit),
        filings,
    );

    let statements = statements.map_err(|e| statements_error(&ticker, e))?;

    Ok(CompanyData {
        key_metrics: degrade(key_metrics, &ticker, "key metrics"),
        enterprise_value: degrade(enterprise_value.map(Some), &ticker, "enterprise value"),
        profile: degrade(profile.map(Some), &ticker, "profile"),
        quote: degrade(quote.map(Some), &ticker, "quote"),
        news: degrade(news, &ticker, "news"),
        filings: degrade(filings, &ticker, "filings"),
        income_statement: statements.income,
        balance_sheet: statements.balance,
        cash_flow_statement: statements.cash_flow,
        ticker,
    })
}

/// Empty statement lists are incomplete data; anything else is a fetch failure.
fn statements_error(ticker: &str, error: FmpError) -> MispricingError {
    match error {
        FmpError::NoData(what) => {
            MispricingError::IncompleteData(format!("{ticker}: no records for {what}"))
        }
        other => MispricingError::DataFetch(format!(
            "failed to retrieve complete financial data for {ticker}: {other}"
        )),
    }
}

/// Fall back to an empty value when an optional input fails.
fn degrade<T: Default, E: Display>(
    result: std::result::Result<T, E>,
    ticker: &str,
    what: &str,
) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(ticker, error = %e, "Could not fetch {what}, continuing without it");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mispricing_traits::form;

    #[test]
    fn test_empty_statements_are_incomplete_data() {
        let err = statements_error("ACME", FmpError::NoData("ACME financial statements".into()));
        assert!(matches!(
            &err,
            MispricingError::IncompleteData(msg) if msg == "ACME: no records for ACME financial statements"
        ));

        let err = statements_error("ACME", FmpError::RateLimitExceeded);
        assert!(matches!(
            &err,
            MispricingError::DataFetch(msg) if msg.starts_with("failed to retrieve complete financial data for ACME")
        ));
    }

    #[test]
    fn test_from_json_defaults_missing_inputs() {
        let data = CompanyData::from_json(r#"{"ticker": "aapl"}"#).unwrap();
        assert_eq!(data.ticker, "AAPL");
        assert!(data.income_statement.is_empty());
        assert!(data.enterprise_value.is_none());
        assert!(data.filings.is_empty());
        assert_eq!(data.company_name(), None);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = CompanyData::from_json(r#"{"incomeStatement": 3}"#).unwrap_err();
        assert!(matches!(err, MispricingError::InvalidData(_)));
    }

    #[test]
    fn test_filings_round_trip_through_buckets() {
        let json = r#"{
            "ticker": "XYZ",
            "filings": {"SC 13D": [{"formType": "SC 13D", "companyName": "Activist LP"}]}
        }"#;
        let data = CompanyData::from_json(json).unwrap();
        assert_eq!(data.filings.bucket(form::ACTIVIST_STAKE).len(), 1);
    }

    #[test]
    fn test_company_name_ignores_empty() {
        let data = CompanyData {
            profile: Some(CompanyProfile {
                company_name: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(data.company_name(), None);
    }

    #[test]
    fn test_degrade_returns_default_on_error() {
        let failed: std::result::Result<Vec<u32>, &str> = Err("boom");
        assert!(degrade(failed, "XYZ", "news").is_empty());
        assert_eq!(degrade(Ok::<_, &str>(Some(3)), "XYZ", "quote"), Some(3));
    }

    #[tokio::test]
    async fn test_fetch_requires_fmp_key() {
        let err = fetch_company_data(&Config::default(), "AAPL")
            .await
            .unwrap_err();
        assert!(matches!(err, MispricingError::Config(_)));
    }

    #[tokio::test]
    async fn test_fetch_rejects_blank_ticker() {
        let err = fetch_company_data(&Config::default(), "  ").await.unwrap_err();
        assert!(matches!(err, MispricingError::InvalidData(_)));
    }
}
