//! Report command implementation.

use crate::output::{Format, print_report};
use anyhow::{Context, Result};
use mispricing::{CompanyData, ValuationConfig, analyze_with};
use std::{fs, path::Path};

/// Analyze a saved company data file.
pub(crate) fn run_report(path: &Path, format: Format, cost_of_capital: Option<f64>) -> Result<()> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data = CompanyData::from_json(&json)?;

    let mut valuation = ValuationConfig::default();
    if let Some(rate) = cost_of_capital {
        valuation.cost_of_capital = rate;
    }

    let report = analyze_with(&data, &valuation);
    print_report(&report, format)
}
