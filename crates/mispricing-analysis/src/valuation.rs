//! Free cash flow yield and a simplified earnings power value.
//!
//! ```text
//! FCF yield       = latest FCF / enterprise value * 100
//! normalized EBIT = mean(EBITDA - D&A) over every income statement supplied
//! EPV (firm)      = normalized EBIT / cost of capital
//! EPV (equity)    = EPV (firm) - (total debt - cash)
//! ```
//!
//! Every division is guarded and degrades to zero.

use mispricing_traits::{EnterpriseValue, IncomeStatement};
use serde::{Deserialize, Serialize};

use crate::{
    reclassify::ReclassifiedYear,
    rounding::{round_to, round_whole},
};

/// Default cost of capital used to capitalize normalized EBIT.
pub const COST_OF_CAPITAL: f64 = 0.10;

/// Configuration for the valuation calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Discount rate applied to normalized EBIT (default: 0.10).
    pub cost_of_capital: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            cost_of_capital: COST_OF_CAPITAL,
        }
    }
}

/// Earnings power value breakdown, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EarningsPowerValue {
    /// EPV attributable to equity holders.
    pub epv_equity: i64,
    /// Mean EBIT across the supplied income statements.
    pub normalized_ebit: i64,
    /// Total debt less cash and equivalents.
    pub net_debt: i64,
}

/// Valuation metrics derived from the reclassified series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationMetrics {
    /// Latest free cash flow as a percentage of enterprise value, 2 decimals.
    pub free_cash_flow_yield: f64,
    /// Earnings power value breakdown.
    pub earnings_power_value: EarningsPowerValue,
}

/// Computes [`ValuationMetrics`].
///
/// # Example
///
/// ```ignore
/// use mispricing_analysis::valuation::{ValuationCalculator, ValuationConfig};
///
/// let calculator = ValuationCalculator::new(ValuationConfig { cost_of_capital: 0.08 });
/// let metrics = calculator.compute(&reclassified, Some(&enterprise_value), &income);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValuationCalculator {
    config: ValuationConfig,
}

impl ValuationCalculator {
    /// Create a calculator with the given configuration.
    #[must_use]
    pub const fn new(config: ValuationConfig) -> Self {
        Self { config }
    }

    /// The configured cost of capital.
    #[must_use]
    pub const fn cost_of_capital(&self) -> f64 {
        self.config.cost_of_capital
    }

    /// Compute valuation metrics.
    ///
    /// * `reclassified` - output of [`crate::reclassify()`], most recent year first
    /// * `enterprise_value` - latest snapshot, if one was retrieved
    /// * `income` - every income statement available, not only reclassified years
    #[must_use]
    pub fn compute(
        &self,
        reclassified: &[ReclassifiedYear],
        enterprise_value: Option<&EnterpriseValue>,
        income: &[IncomeStatement],
    ) -> ValuationMetrics {
        let latest_fcf = reclassified
            .first()
            .map_or(0.0, |r| r.free_cash_flow as f64);

        let ev = enterprise_value.map_or(0.0, |ev| ev.enterprise_value);
        let fcf_yield = if ev > 0.0 {
            latest_fcf / ev * 100.0
        } else {
            0.0
        };

        let normalized_ebit = if income.is_empty() {
            0.0
        } else {
            income.iter().map(IncomeStatement::ebit).sum::<f64>() / income.len() as f64
        };

        let cost_of_capital = self.config.cost_of_capital;
        let epv_firm = if cost_of_capital > 0.0 {
            normalized_ebit / cost_of_capital
        } else {
            0.0
        };

        let net_debt = enterprise_value.map_or(0.0, EnterpriseValue::net_debt);
        let epv_equity = epv_firm - net_debt;

        ValuationMetrics {
            free_cash_flow_yield: round_to(fcf_yield, 2),
            earnings_power_value: EarningsPowerValue {
                epv_equity: round_whole(epv_equity),
                normalized_ebit: round_whole(normalized_ebit),
                net_debt: round_whole(net_debt),
            },
        }
    }
}

/// Compute valuation metrics with the default cost of capital.
#[must_use]
pub fn valuation_metrics(
    reclassified: &[ReclassifiedYear],
    enterprise_value: Option<&EnterpriseValue>,
    income: &[IncomeStatement],
) -> ValuationMetrics {
    ValuationCalculator::default().compute(reclassified, enterprise_value, income)
}
