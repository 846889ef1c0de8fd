#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/mispricing/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core record types and capability traits for the mispricing workspace.
//!
//! This crate defines the schema contract with upstream data providers and the
//! seams where the analysis layer accepts pluggable behavior.

/// The version of the mispricing-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod filing;
pub mod news;
pub mod scoring;
pub mod types;

// Re-exports
pub use error::{MispricingError, Result};
pub use filing::{FilingRecord, FilingsByType, form};
pub use news::NewsArticle;
pub use scoring::{InsiderClassifier, PolarityScorer};
pub use types::{BalanceSheet, CashFlowStatement, EnterpriseValue, FiscalYear, IncomeStatement};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
