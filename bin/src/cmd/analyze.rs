//! Analyze command implementation.

use crate::output::{Format, print_report};
use anyhow::{Context, Result};
use mispricing::{Config, analyze_with, fetch_company_data};
use std::{fs, path::PathBuf};

/// Overrides for the environment configuration.
#[derive(Debug, Default)]
pub(crate) struct AnalyzeOptions {
    pub(crate) periods: Option<u32>,
    pub(crate) news: Option<u32>,
    pub(crate) cost_of_capital: Option<f64>,
    pub(crate) save: Option<PathBuf>,
}

impl AnalyzeOptions {
    fn apply(&self, config: &mut Config) {
        if let Some(periods) = self.periods {
            config.statement_limit = periods;
        }
        if let Some(news) = self.news {
            config.news_limit = news;
        }
        if let Some(rate) = self.cost_of_capital {
            config.valuation.cost_of_capital = rate;
        }
    }
}

/// Fetch live data for `ticker` and print the report.
pub(crate) async fn run_analyze(ticker: &str, format: Format, options: AnalyzeOptions) -> Result<()> {
    let mut config = Config::from_env()?;
    options.apply(&mut config);

    let data = fetch_company_data(&config, ticker).await?;

    if let Some(path) = &options.save {
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Saved company data");
    }

    let report = analyze_with(&data, &config.valuation);
    print_report(&report, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_override_config() {
        let mut config = Config::default();
        let options = AnalyzeOptions {
            periods: Some(5),
            cost_of_capital: Some(0.08),
            ..Default::default()
        };
        options.apply(&mut config);

        assert_eq!(config.statement_limit, 5);
        assert_eq!(config.news_limit, 50);
        assert_eq!(config.valuation.cost_of_capital, 0.08);
    }
}
