//! FMP API client implementation.

use crate::{
    Result,
    error::{FmpError, load_env_file},
    types::{
        BalanceSheet, CashFlowStatement, CompanyProfile, EnterpriseValue, FinancialStatements,
        IncomeStatement, KeyMetrics, NewsArticle, Period, Quote,
    },
};
use reqwest::Client;
use std::env;

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::MissingApiKey`] if the variable is not set, or
    /// [`FmpError::Env`] if a `.env` file exists but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        load_env_file()?;

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Endpoint path for a per-period report series.
    fn period_endpoint(path: &str, symbol: &str, period: Period, limit: Option<u32>) -> String {
        let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
        format!(
            "{path}?symbol={}&period={}{limit_param}",
            symbol.to_uppercase(),
            period.as_str(),
        )
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        tracing::debug!(endpoint, "FMP request");
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // Error payloads arrive with a 200 status
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        serde_json::from_str(&text).map_err(|e| {
            FmpError::Json(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse: {e}. Response: {text}"),
            )))
        })
    }

    /// Get income statements for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol (e.g., "AAPL")
    /// * `period` - Annual or quarterly
    /// * `limit` - Number of periods to return (most recent first)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn income_statement(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<IncomeStatement>> {
        let endpoint = Self::period_endpoint("income-statement", symbol, period, limit);
        self.get(&endpoint).await
    }

    /// Get balance sheets for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn balance_sheet(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<BalanceSheet>> {
        let endpoint = Self::period_endpoint("balance-sheet-statement", symbol, period, limit);
        self.get(&endpoint).await
    }

    /// Get cash flow statements for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn cash_flow(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<CashFlowStatement>> {
        let endpoint = Self::period_endpoint("cash-flow-statement", symbol, period, limit);
        self.get(&endpoint).await
    }

    /// Get key metrics for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn key_metrics(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<KeyMetrics>> {
        let endpoint = Self::period_endpoint("key-metrics", symbol, period, limit);
        self.get(&endpoint).await
    }

    /// Get enterprise value snapshots for a symbol, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn enterprise_values(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<EnterpriseValue>> {
        let endpoint = Self::period_endpoint("enterprise-values", symbol, period, limit);
        self.get(&endpoint).await
    }

    /// Get the most recent annual enterprise value snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::NoData`] if FMP returns no snapshot, or an error
    /// if the API request fails.
    pub async fn latest_enterprise_value(&self, symbol: &str) -> Result<EnterpriseValue> {
        self.enterprise_values(symbol, Period::Annual, Some(1))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::NoData(format!("{symbol} enterprise values")))
    }

    /// Get the company profile for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn profile(&self, symbol: &str) -> Result<CompanyProfile> {
        let endpoint = format!("profile?symbol={}", symbol.to_uppercase());
        let profiles: Vec<CompanyProfile> = self.get(&endpoint).await?;
        profiles
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Get real-time quote for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let endpoint = format!("quote?symbol={}", symbol.to_uppercase());
        let quotes: Vec<Quote> = self.get(&endpoint).await?;
        quotes
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Get recent news headlines for a symbol, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn stock_news(&self, symbol: &str, limit: u32) -> Result<Vec<NewsArticle>> {
        let endpoint = format!("news/stock?symbols={}&limit={limit}", symbol.to_uppercase());
        self.get(&endpoint).await
    }

    /// Get income statements, balance sheets and cash flows in parallel.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol
    /// * `period` - Annual or quarterly
    /// * `limit` - Number of periods to fetch per statement
    ///
    /// # Errors
    ///
    /// Returns the first request error, or [`FmpError::NoData`] if any of the
    /// three statements comes back empty.
    pub async fn financial_statements(
        &self,
        symbol: &str,
        period: Period,
        limit: u32,
    ) -> Result<FinancialStatements> {
        let (income, balance, cash_flow) = tokio::join!(
            self.income_statement(symbol, period, Some(limit)),
            self.balance_sheet(symbol, period, Some(limit)),
            self.cash_flow(symbol, period, Some(limit)),
        );
        let statements = FinancialStatements {
            income: income?,
            balance: balance?,
            cash_flow: cash_flow?,
        };

        if statements.income.is_empty()
            || statements.balance.is_empty()
            || statements.cash_flow.is_empty()
        {
            return Err(FmpError::NoData(format!("{symbol} financial statements")));
        }

        tracing::debug!(
            symbol,
            income = statements.income.len(),
            balance = statements.balance.len(),
            cash_flow = statements.cash_flow.len(),
            "Fetched financial statements"
        );
        Ok(statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key");
        assert_eq!(
            client.url("quote?symbol=AAPL"),
            "https://financialmodelingprep.com/stable/quote?symbol=AAPL&apikey=test_key"
        );
        assert_eq!(
            client.url("income-statement?symbol=AAPL&period=annual"),
            "https://financialmodelingprep.com/stable/income-statement?symbol=AAPL&period=annual&apikey=test_key"
        );
    }

    #[test]
    fn test_period_endpoint() {
        assert_eq!(
            FmpClient::period_endpoint("cash-flow-statement", "msft", Period::Annual, Some(10)),
            "cash-flow-statement?symbol=MSFT&period=annual&limit=10"
        );
        assert_eq!(
            FmpClient::period_endpoint("enterprise-values", "msft", Period::Quarter, None),
            "enterprise-values?symbol=MSFT&period=quarter"
        );
    }

    #[test]
    fn test_statements_deserialize_from_fmp_payload() {
        let json = r#"[{"date": "2024-09-28", "symbol": "AAPL", "fiscalYear": "2024",
                         "period": "FY", "ebitda": 134661000000, "incomeTaxExpense": null}]"#;
        let income: Vec<IncomeStatement> = serde_json::from_str(json).unwrap();
        assert_eq!(income[0].fiscal_year().map(|y| y.value()), Some(2024));
        assert_eq!(income[0].income_tax_expense, 0.0);
    }
}
