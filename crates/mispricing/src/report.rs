//! Four-pillar report assembly.
//!
//! ```text
//! business_quality     reclassified cash flows, key metrics, profile, filing links
//! contrarian_analysis  quote, news sentiment, psychological checklist
//! valuation            FCF yield and EPV, key metrics, quote
//! catalysts            guideposts
//! ```

use std::collections::BTreeMap;

use mispricing_analysis::{
    CatalystGuidepost, ChecklistItem, LexiconScorer, ReclassifiedYear, SentimentReport,
    ValuationCalculator, ValuationConfig, ValuationMetrics, analyze_sentiment, find_catalysts,
    munger_checklist, reclassify,
};
use mispricing_fmp::{CompanyProfile, KeyMetrics, Quote};
use mispricing_traits::{FilingsByType, form};
use serde::Serialize;

use crate::data::CompanyData;

const UNKNOWN_COMPANY: &str = "N/A";
const MISSING_LINK: &str = "#";

/// Understanding what the company earns and reinvests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessQuality {
    /// Reclassified years, most recent first.
    pub reclassified_cash_flow_analysis: Vec<ReclassifiedYear>,
    /// Key metrics as delivered.
    pub key_metrics: Vec<KeyMetrics>,
    /// Company profile.
    pub company_profile: Option<CompanyProfile>,
    /// Links to the latest annual and quarterly reports, keyed by form type.
    pub sec_filings: BTreeMap<&'static str, String>,
}

/// Where the market's view may be wrong.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrarianAnalysis {
    /// Latest quote.
    pub market_data: Option<Quote>,
    /// Headline sentiment.
    pub news_sentiment: SentimentReport,
    /// Biases to check.
    pub munger_checklist: &'static [ChecklistItem],
}

/// What the business is worth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationPillar {
    /// FCF yield and earnings power value.
    pub valuation_analysis: ValuationMetrics,
    /// Key metrics as delivered.
    pub key_metrics: Vec<KeyMetrics>,
    /// Latest quote.
    pub market_data: Option<Quote>,
}

/// What could close the gap between price and value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalystPillar {
    /// Catalyst guideposts.
    pub guideposts: Vec<CatalystGuidepost>,
}

/// The four pillars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pillars {
    /// Pillar 1.
    pub business_quality: BusinessQuality,
    /// Pillar 2.
    pub contrarian_analysis: ContrarianAnalysis,
    /// Pillar 3.
    pub valuation: ValuationPillar,
    /// Pillar 4.
    pub catalysts: CatalystPillar,
}

/// Complete analysis of one company.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MispricingReport {
    /// Upper-case ticker.
    pub ticker: String,
    /// Company name, or `"N/A"`.
    pub company_name: String,
    /// The four pillars.
    pub pillars: Pillars,
}

impl MispricingReport {
    /// Most recent reclassified year, if any year qualified.
    #[must_use]
    pub fn latest_year(&self) -> Option<&ReclassifiedYear> {
        self.pillars
            .business_quality
            .reclassified_cash_flow_analysis
            .first()
    }
}

/// Analyze company data with the default valuation parameters.
#[must_use]
pub fn analyze(data: &CompanyData) -> MispricingReport {
    analyze_with(data, &ValuationConfig::default())
}

/// Analyze company data.
///
/// Reclassification feeds the valuation; the catalyst scan and sentiment
/// run independently. Headlines are scored with [`LexiconScorer`].
#[must_use]
pub fn analyze_with(data: &CompanyData, valuation: &ValuationConfig) -> MispricingReport {
    let reclassified = reclassify(
        &data.income_statement,
        &data.balance_sheet,
        &data.cash_flow_statement,
    );
    let valuation_analysis = ValuationCalculator::new(*valuation).compute(
        &reclassified,
        data.enterprise_value.as_ref(),
        &data.income_statement,
    );
    let news_sentiment = analyze_sentiment(&data.news, &LexiconScorer::default());
    let guideposts = find_catalysts(&data.filings);

    tracing::info!(
        ticker = %data.ticker,
        years = reclassified.len(),
        guideposts = guideposts.len(),
        "Analysis complete"
    );

    MispricingReport {
        ticker: data.ticker.to_uppercase(),
        company_name: data.company_name().unwrap_or(UNKNOWN_COMPANY).to_string(),
        pillars: Pillars {
            business_quality: BusinessQuality {
                reclassified_cash_flow_analysis: reclassified,
                key_metrics: data.key_metrics.clone(),
                company_profile: data.profile.clone(),
                sec_filings: report_links(&data.filings),
            },
            contrarian_analysis: ContrarianAnalysis {
                market_data: data.quote.clone(),
                news_sentiment,
                munger_checklist: munger_checklist(),
            },
            valuation: ValuationPillar {
                valuation_analysis,
                key_metrics: data.key_metrics.clone(),
                market_data: data.quote.clone(),
            },
            catalysts: CatalystPillar { guideposts },
        },
    }
}

fn report_links(filings: &FilingsByType) -> BTreeMap<&'static str, String> {
    [form::ANNUAL_REPORT, form::QUARTERLY_REPORT]
        .into_iter()
        .map(|f| {
            let link = filings
                .first(f)
                .and_then(|filing| filing.link())
                .unwrap_or(MISSING_LINK);
            (f, link.to_string())
        })
        .collect()
}
