//! Analytical core for the mispricing workspace.
//!
//! This crate turns already-materialized company data into four independent
//! results:
//! - Reclassification: annual statements aligned by fiscal year and recast as
//!   NOPAT, net investment and free cash flow
//! - Valuation: free cash flow yield and a simplified earnings power value
//! - Catalysts: activist and insider signals from filing metadata, plus
//!   standing operational and financial guideposts
//! - Sentiment: headline polarity counts and a bounded sample
//!
//! Every function here is pure. Missing fields count as zero, divisions by zero
//! degrade to zero, and years without full statement coverage are skipped.
//!
//! # Example
//!
//! ```ignore
//! use mispricing_analysis::{reclassify, valuation_metrics};
//!
//! let reclassified = reclassify(&income, &balance, &cash_flow);
//! let metrics = valuation_metrics(&reclassified, Some(&enterprise_value), &income);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod catalysts;
pub mod checklist;
pub mod frame;
pub mod reclassify;
mod rounding;
pub mod sentiment;
pub mod valuation;

// Re-export key types
pub use catalysts::{
    CatalystGuidepost, CatalystKind, CatalystScanner, GuidepostStatus, KeywordInsiderClassifier,
    find_catalysts,
};
pub use checklist::{ChecklistItem, munger_checklist};
pub use frame::reclassified_frame;
pub use reclassify::{ReclassifiedYear, reclassify};
pub use sentiment::{
    LexiconScorer, SentimentLabel, SentimentRecord, SentimentReport, SentimentSummary,
    analyze_sentiment,
};
pub use valuation::{
    COST_OF_CAPITAL, EarningsPowerValue, ValuationCalculator, ValuationConfig, ValuationMetrics,
    valuation_metrics,
};
