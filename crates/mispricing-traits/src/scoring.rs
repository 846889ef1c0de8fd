//! Capability traits injected into the analysis layer.
//!
//! The catalyst scan and the sentiment aggregation take these as parameters;
//! tests pass deterministic closures.

use crate::FilingRecord;

/// Scores the sentiment polarity of a piece of text.
///
/// Implementations should be thread-safe (`Send + Sync`) and return values in
/// `[-1.0, 1.0]`, where negative is bearish and positive is bullish.
///
/// Any `Fn(&str) -> f64` closure is a scorer:
///
/// ```
/// use mispricing_traits::PolarityScorer;
///
/// let always_bullish = |_: &str| 0.8;
/// assert_eq!(always_bullish.polarity("anything"), 0.8);
/// ```
pub trait PolarityScorer: Send + Sync {
    /// Polarity of `text` in `[-1.0, 1.0]`.
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Decides whether an insider-transaction filing reports an open-market purchase.
pub trait InsiderClassifier: Send + Sync {
    /// Returns `true` when `filing` should be surfaced as an insider-buying catalyst.
    fn is_purchase(&self, filing: &FilingRecord) -> bool;
}

impl<F> InsiderClassifier for F
where
    F: Fn(&FilingRecord) -> bool + Send + Sync,
{
    fn is_purchase(&self, filing: &FilingRecord) -> bool {
        self(filing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_scorer() {
        let scorer = |text: &str| if text.contains("beat") { 0.5 } else { 0.0 };
        assert_eq!(scorer.polarity("earnings beat"), 0.5);
        assert_eq!(scorer.polarity("flat quarter"), 0.0);
    }

    #[test]
    fn test_closure_classifier() {
        let classifier = |f: &FilingRecord| f.description() == "P";
        let filing = FilingRecord {
            description: Some("P".to_string()),
            ..Default::default()
        };
        assert!(classifier.is_purchase(&filing));
        assert!(!classifier.is_purchase(&FilingRecord::default()));
    }
}
