//! Annual statement records and the fiscal-year key used to align them.
//!
//! Field names follow the upstream provider schema verbatim (camelCase on the
//! wire). Numeric fields default to `0.0` when absent or `null`; the defaulting
//! happens here and nowhere else.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A fiscal year, e.g. `2023`.
///
/// Statements arrive labelled with a string year. [`FiscalYear::from_label`] is
/// the single place where that label is turned into an integer; all joins and
/// prior-year arithmetic happen on the integer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiscalYear(i32);

impl FiscalYear {
    /// Create a fiscal year from its integer value.
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// Parse a statement year label such as `"2023"`.
    ///
    /// Returns `None` for labels that are not an integer year.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().parse::<i32>().ok().map(Self)
    }

    /// The integer value of this year.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The immediately preceding fiscal year.
    #[must_use]
    pub const fn prior(self) -> Self {
        Self(self.0 - 1)
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deserialize a number that may be absent or `null` as `0.0`.
fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a year label sent either as `"2023"` or `2023`.
fn year_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Label>::deserialize(deserializer)? {
        Some(Label::Text(s)) => s,
        Some(Label::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// `calendarYear` wins when both labels parse.
fn year_from_labels(calendar: &str, fiscal: &str) -> Option<FiscalYear> {
    FiscalYear::from_label(calendar).or_else(|| FiscalYear::from_label(fiscal))
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Income statement for one fiscal year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Period end date.
    #[serde(default)]
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Calendar year label.
    #[serde(default, deserialize_with = "year_label")]
    pub calendar_year: String,
    /// Fiscal year label, sent by newer provider endpoints alongside or instead of
    /// `calendarYear`.
    #[serde(
        default,
        rename = "fiscalYear",
        deserialize_with = "year_label",
        skip_serializing_if = "String::is_empty"
    )]
    pub fiscal_year_label: String,
    /// Reporting period (FY, Q1, ...).
    #[serde(default)]
    pub period: String,
    /// Total revenue.
    #[serde(default, deserialize_with = "number")]
    pub revenue: f64,
    /// Gross profit.
    #[serde(default, deserialize_with = "number")]
    pub gross_profit: f64,
    /// Operating income.
    #[serde(default, deserialize_with = "number")]
    pub operating_income: f64,
    /// Net income.
    #[serde(default, deserialize_with = "number")]
    pub net_income: f64,
    /// EBITDA.
    #[serde(default, deserialize_with = "number")]
    pub ebitda: f64,
    /// Depreciation and amortization.
    #[serde(default, deserialize_with = "number")]
    pub depreciation_and_amortization: f64,
    /// Income tax expense.
    #[serde(default, deserialize_with = "number")]
    pub income_tax_expense: f64,
    /// Income before tax.
    #[serde(default, deserialize_with = "number")]
    pub income_before_tax: f64,
}

impl IncomeStatement {
    /// The fiscal year this statement belongs to, if its label parses.
    #[must_use]
    pub fn fiscal_year(&self) -> Option<FiscalYear> {
        year_from_labels(&self.calendar_year, &self.fiscal_year_label)
    }

    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// EBIT, derived as EBITDA less depreciation and amortization.
    #[must_use]
    pub const fn ebit(&self) -> f64 {
        self.ebitda - self.depreciation_and_amortization
    }

    /// Effective tax rate, or `0.0` when there is no pre-tax income to divide by.
    #[must_use]
    pub fn effective_tax_rate(&self) -> f64 {
        if self.income_before_tax != 0.0 {
            self.income_tax_expense / self.income_before_tax
        } else {
            0.0
        }
    }
}

/// Balance sheet for one fiscal year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Period end date.
    #[serde(default)]
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Calendar year label.
    #[serde(default, deserialize_with = "year_label")]
    pub calendar_year: String,
    /// Fiscal year label, sent by newer provider endpoints alongside or instead of
    /// `calendarYear`.
    #[serde(
        default,
        rename = "fiscalYear",
        deserialize_with = "year_label",
        skip_serializing_if = "String::is_empty"
    )]
    pub fiscal_year_label: String,
    /// Reporting period.
    #[serde(default)]
    pub period: String,
    /// Cash and cash equivalents.
    #[serde(default, deserialize_with = "number")]
    pub cash_and_cash_equivalents: f64,
    /// Net receivables.
    #[serde(default, deserialize_with = "number")]
    pub net_receivables: f64,
    /// Inventory.
    #[serde(default, deserialize_with = "number")]
    pub inventory: f64,
    /// Accounts payable.
    #[serde(default, deserialize_with = "number")]
    pub account_payables: f64,
    /// Total assets.
    #[serde(default, deserialize_with = "number")]
    pub total_assets: f64,
    /// Total debt.
    #[serde(default, deserialize_with = "number")]
    pub total_debt: f64,
    /// Total stockholders' equity.
    #[serde(default, deserialize_with = "number")]
    pub total_stockholders_equity: f64,
}

impl BalanceSheet {
    /// The fiscal year this statement belongs to, if its label parses.
    #[must_use]
    pub fn fiscal_year(&self) -> Option<FiscalYear> {
        year_from_labels(&self.calendar_year, &self.fiscal_year_label)
    }

    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Operating working capital: receivables plus inventory less payables.
    #[must_use]
    pub const fn operating_working_capital(&self) -> f64 {
        (self.net_receivables + self.inventory) - self.account_payables
    }
}

/// Cash flow statement for one fiscal year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    /// Period end date.
    #[serde(default)]
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Calendar year label.
    #[serde(default, deserialize_with = "year_label")]
    pub calendar_year: String,
    /// Fiscal year label, sent by newer provider endpoints alongside or instead of
    /// `calendarYear`.
    #[serde(
        default,
        rename = "fiscalYear",
        deserialize_with = "year_label",
        skip_serializing_if = "String::is_empty"
    )]
    pub fiscal_year_label: String,
    /// Reporting period.
    #[serde(default)]
    pub period: String,
    /// Operating cash flow.
    #[serde(default, deserialize_with = "number")]
    pub operating_cash_flow: f64,
    /// Capital expenditure, reported as a negative number.
    #[serde(default, deserialize_with = "number")]
    pub capital_expenditure: f64,
    /// Free cash flow as reported by the provider.
    #[serde(default, deserialize_with = "number")]
    pub free_cash_flow: f64,
}

impl CashFlowStatement {
    /// The fiscal year this statement belongs to, if its label parses.
    #[must_use]
    pub fn fiscal_year(&self) -> Option<FiscalYear> {
        year_from_labels(&self.calendar_year, &self.fiscal_year_label)
    }

    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Capital expenditure as a positive investment figure.
    #[must_use]
    pub const fn capex_outflow(&self) -> f64 {
        -self.capital_expenditure
    }
}

/// Point-in-time enterprise value snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseValue {
    /// Snapshot date.
    #[serde(default)]
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Market capitalization.
    #[serde(default, deserialize_with = "number")]
    pub market_capitalization: f64,
    /// Enterprise value.
    #[serde(default, deserialize_with = "number")]
    pub enterprise_value: f64,
    /// Total debt added to market capitalization.
    #[serde(default, deserialize_with = "number")]
    pub add_total_debt: f64,
    /// Cash subtracted from market capitalization.
    #[serde(default, deserialize_with = "number")]
    pub minus_cash_and_cash_equivalents: f64,
}

impl EnterpriseValue {
    /// Net debt: total debt less cash and equivalents.
    #[must_use]
    pub const fn net_debt(&self) -> f64 {
        self.add_total_debt - self.minus_cash_and_cash_equivalents
    }
}
