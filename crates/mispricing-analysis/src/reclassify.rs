//! Statement alignment and cash-flow reclassification.
//!
//! Joins income, balance and cash-flow statements on fiscal year and recasts
//! each qualifying year into economic components:
//!
//! ```text
//! EBIT           = EBITDA - D&A
//! NOPAT          = EBIT * (1 - effective tax rate)
//! Op. WC         = (receivables + inventory) - payables
//! Net Investment = (Op. WC - prior Op. WC) + capex outflow
//! FCF            = NOPAT - Net Investment
//! ```
//!
//! A year qualifies only when it and its immediate prior year are present in
//! all three statement kinds. Partial coverage is never interpolated.

use mispricing_traits::{BalanceSheet, CashFlowStatement, FiscalYear, IncomeStatement};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::rounding::round_whole;

/// Reclassified cash-flow components for one fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReclassifiedYear {
    /// Fiscal year.
    pub year: FiscalYear,
    /// Net operating profit after tax.
    pub nopat: i64,
    /// Change in operating working capital plus capital expenditure.
    pub net_investment: i64,
    /// NOPAT less net investment.
    pub free_cash_flow: i64,
}

/// Index records by fiscal year. Later records win on duplicate years.
fn index_by_year<T>(
    records: &[T],
    year_of: impl Fn(&T) -> Option<FiscalYear>,
) -> BTreeMap<FiscalYear, &T> {
    let mut index = BTreeMap::new();
    for record in records {
        match year_of(record) {
            Some(year) => {
                index.insert(year, record);
            }
            None => tracing::debug!("Skipping statement without a numeric fiscal year"),
        }
    }
    index
}

/// Aligned statement indices for one company.
struct Aligned<'a> {
    income: BTreeMap<FiscalYear, &'a IncomeStatement>,
    balance: BTreeMap<FiscalYear, &'a BalanceSheet>,
    cash_flow: BTreeMap<FiscalYear, &'a CashFlowStatement>,
}

impl Aligned<'_> {
    fn covers(&self, year: FiscalYear) -> bool {
        self.income.contains_key(&year)
            && self.balance.contains_key(&year)
            && self.cash_flow.contains_key(&year)
    }

    fn reclassify_year(&self, year: FiscalYear) -> Option<ReclassifiedYear> {
        let prior = year.prior();
        if !(self.covers(year) && self.covers(prior)) {
            tracing::debug!(%year, "Skipping year without full statement coverage");
            return None;
        }

        let income = self.income[&year];
        let balance = self.balance[&year];
        let balance_prior = self.balance[&prior];
        let cash_flow = self.cash_flow[&year];

        let nopat = income.ebit() * (1.0 - income.effective_tax_rate());

        let change_in_working_capital =
            balance.operating_working_capital() - balance_prior.operating_working_capital();
        let net_investment = change_in_working_capital + cash_flow.capex_outflow();
        let free_cash_flow = nopat - net_investment;

        Some(ReclassifiedYear {
            year,
            nopat: round_whole(nopat),
            net_investment: round_whole(net_investment),
            free_cash_flow: round_whole(free_cash_flow),
        })
    }
}

/// Reclassify annual statements into NOPAT, net investment and free cash flow.
///
/// Candidate years are the balance-sheet years, most recent first. The
/// earliest balance-sheet year is never emitted because it has no prior-year
/// baseline. Years lacking coverage in any statement kind (for the year itself
/// or its prior year) are omitted without a placeholder.
///
/// The result is ordered by descending year: index 0 is the most recent
/// qualifying year.
#[must_use]
pub fn reclassify(
    income: &[IncomeStatement],
    balance: &[BalanceSheet],
    cash_flow: &[CashFlowStatement],
) -> Vec<ReclassifiedYear> {
    let aligned = Aligned {
        income: index_by_year(income, IncomeStatement::fiscal_year),
        balance: index_by_year(balance, BalanceSheet::fiscal_year),
        cash_flow: index_by_year(cash_flow, CashFlowStatement::fiscal_year),
    };

    let candidates = aligned.balance.len().saturating_sub(1);
    aligned
        .balance
        .keys()
        .rev()
        .take(candidates)
        .filter_map(|&year| aligned.reclassify_year(year))
        .collect()
}
