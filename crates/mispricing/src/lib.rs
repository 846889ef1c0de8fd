#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/mispricing/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! ## Crate Organization
//!
//! - [`traits`] - Record types, fiscal-year key and capability traits
//! - [`analysis`] - Reclassification, valuation, catalysts and sentiment
//! - [`fmp`] - Financial Modeling Prep client
//! - [`sec`] - sec-api.io filing search client
//! - [`config`], [`data`], [`report`] - configuration, retrieval and the
//!   four-pillar report

/// Version information for the mispricing crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Record types and capability traits.
///
/// - [`PolarityScorer`](traits::PolarityScorer) scores headline text
/// - [`InsiderClassifier`](traits::InsiderClassifier) decides whether a Form 4
///   is a purchase
pub mod traits {
    pub use mispricing_traits::*;
}

pub use mispricing_traits::{
    FilingRecord, FilingsByType, FiscalYear, InsiderClassifier, MispricingError, PolarityScorer,
    Result,
};

// ============================================================================
// Analysis
// ============================================================================

/// Pure analysis over materialized company data.
///
/// ```text
/// tax rate        = income tax expense / income before tax
/// NOPAT           = (EBITDA - D&A) * (1 - tax rate)
/// net investment  = capex outflow + change in operating working capital
/// FCF             = NOPAT - net investment
/// FCF yield       = latest FCF / enterprise value * 100
/// EPV (equity)    = mean EBIT / cost of capital - net debt
/// ```
pub mod analysis {
    pub use mispricing_analysis::*;
}

pub use mispricing_analysis::{
    CatalystGuidepost, ReclassifiedYear, SentimentReport, ValuationConfig, ValuationMetrics,
};

// ============================================================================
// Data Providers
// ============================================================================

/// Financial Modeling Prep (FMP) API client.
///
/// ## Setup
///
/// 1. Get an API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add it to `.env`
pub mod fmp {
    pub use mispricing_fmp::*;
}

/// sec-api.io filing search client.
///
/// Set the `SEC_API_KEY` environment variable or add it to `.env`.
pub mod sec {
    pub use mispricing_sec::*;
}

// ============================================================================
// Orchestration
// ============================================================================

pub mod config;
pub mod data;
pub mod report;

pub use config::Config;
pub use data::{CompanyData, fetch_company_data};
pub use report::{MispricingReport, analyze, analyze_with};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use mispricing::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CompanyData, Config, MispricingError, MispricingReport, Result, analyze, analyze_with,
        fetch_company_data,
    };
}

// ============================================================================
// Tests
// ============================================================================
