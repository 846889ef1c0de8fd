//! Data types for FMP API responses.
//!
//! Statement and enterprise value records are the shared
//! [`mispricing_traits`] types; this module adds the display-only records
//! (key metrics, profile, quote) and the statement bundle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use mispricing_traits::{
    BalanceSheet, CashFlowStatement, EnterpriseValue, IncomeStatement, NewsArticle,
};

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

/// Key financial metrics from FMP.
///
/// Ratios are `None` when FMP sends `null`, which it does for loss-making
/// or newly listed companies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    /// Period end date.
    #[serde(default)]
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Reporting period.
    #[serde(default)]
    pub period: String,
    /// Market capitalization.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Enterprise value.
    #[serde(default)]
    pub enterprise_value: Option<f64>,
    /// EV / EBITDA.
    #[serde(default, alias = "evToEBITDA")]
    pub ev_to_ebitda: Option<f64>,
    /// Earnings yield.
    #[serde(default)]
    pub earnings_yield: Option<f64>,
    /// Free cash flow yield.
    #[serde(default)]
    pub free_cash_flow_yield: Option<f64>,
    /// Return on equity.
    #[serde(default)]
    pub return_on_equity: Option<f64>,
    /// Return on invested capital.
    #[serde(default)]
    pub return_on_invested_capital: Option<f64>,
    /// Current ratio.
    #[serde(default)]
    pub current_ratio: Option<f64>,
    /// Net debt to EBITDA.
    #[serde(default, alias = "netDebtToEBITDA")]
    pub net_debt_to_ebitda: Option<f64>,
}

impl KeyMetrics {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Company profile from FMP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Sector.
    #[serde(default)]
    pub sector: Option<String>,
    /// Industry.
    #[serde(default)]
    pub industry: Option<String>,
    /// Listing exchange.
    #[serde(default)]
    pub exchange: Option<String>,
    /// Chief executive.
    #[serde(default)]
    pub ceo: Option<String>,
    /// Company website.
    #[serde(default)]
    pub website: Option<String>,
    /// Business description.
    #[serde(default)]
    pub description: Option<String>,
    /// Last price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Market capitalization.
    #[serde(default, alias = "mktCap")]
    pub market_cap: Option<f64>,
}

/// Real-time quote data from FMP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub name: Option<String>,
    /// Current price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Percent change.
    #[serde(default, alias = "changePercentage")]
    pub changes_percentage: Option<f64>,
    /// 52-week high.
    #[serde(default)]
    pub year_high: Option<f64>,
    /// 52-week low.
    #[serde(default)]
    pub year_low: Option<f64>,
    /// Market cap.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// 50-day moving average.
    #[serde(default)]
    pub price_avg50: Option<f64>,
    /// 200-day moving average.
    #[serde(default)]
    pub price_avg200: Option<f64>,
    /// Volume.
    #[serde(default)]
    pub volume: Option<f64>,
}

impl Quote {
    /// Position of the price inside its 52-week range, from 0 (at the low)
    /// to 1 (at the high).
    #[must_use]
    pub fn range_position(&self) -> Option<f64> {
        let (price, low, high) = (self.price?, self.year_low?, self.year_high?);
        let span = high - low;
        (span > 0.0).then(|| (price - low) / span)
    }
}

/// The three annual statement kinds for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// Income statements (most recent first).
    pub income: Vec<IncomeStatement>,
    /// Balance sheets (most recent first).
    pub balance: Vec<BalanceSheet>,
    /// Cash flow statements (most recent first).
    pub cash_flow: Vec<CashFlowStatement>,
}
