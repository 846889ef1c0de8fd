//! Headline sentiment aggregation.
//!
//! Each headline is scored by an injected [`PolarityScorer`] and labelled:
//! polarity above `0.1` is positive, below `-0.1` negative, anything else
//! (including NaN) neutral. Counts cover every article; the returned sample is
//! the first [`SENTIMENT_SAMPLE_SIZE`] records in input order. The sample is a
//! payload-size cap, not a representative subset.

mod lexicon;

pub use lexicon::LexiconScorer;

use mispricing_traits::{NewsArticle, PolarityScorer};
use serde::{Deserialize, Serialize};

/// Maximum number of records returned in [`SentimentReport::articles`].
pub const SENTIMENT_SAMPLE_SIZE: usize = 10;

/// Polarity above which a headline is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity below which a headline is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Sentiment label of a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Polarity above [`POSITIVE_THRESHOLD`].
    Positive,
    /// Polarity below [`NEGATIVE_THRESHOLD`].
    Negative,
    /// Everything else.
    Neutral,
}

impl SentimentLabel {
    /// Classify a polarity score.
    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// A labelled headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentRecord {
    /// Headline text.
    pub text: String,
    /// Article URL.
    pub url: Option<String>,
    /// Assigned label.
    pub sentiment_label: SentimentLabel,
}

/// Label counts over all scored articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Number of positive headlines.
    pub positive_count: usize,
    /// Number of negative headlines.
    pub negative_count: usize,
    /// Number of neutral headlines.
    pub neutral_count: usize,
    /// Number of input articles.
    pub total_articles: usize,
}

impl SentimentSummary {
    fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive_count += 1,
            SentimentLabel::Negative => self.negative_count += 1,
            SentimentLabel::Neutral => self.neutral_count += 1,
        }
    }
}

/// Summary counts plus a bounded sample of labelled headlines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Counts over every article.
    pub summary: SentimentSummary,
    /// First [`SENTIMENT_SAMPLE_SIZE`] labelled articles, in input order.
    pub articles: Vec<SentimentRecord>,
}

/// Score and summarize news headlines.
#[must_use]
pub fn analyze_sentiment<S>(articles: &[NewsArticle], scorer: &S) -> SentimentReport
where
    S: PolarityScorer + ?Sized,
{
    let mut summary = SentimentSummary {
        total_articles: articles.len(),
        ..Default::default()
    };
    let mut sample = Vec::with_capacity(articles.len().min(SENTIMENT_SAMPLE_SIZE));

    for (i, article) in articles.iter().enumerate() {
        let text = article.title();
        let label = SentimentLabel::from_polarity(scorer.polarity(text));
        summary.record(label);

        if i < SENTIMENT_SAMPLE_SIZE {
            sample.push(SentimentRecord {
                text: text.to_string(),
                url: article.url.clone(),
                sentiment_label: label,
            });
        }
    }

    tracing::debug!(
        positive = summary.positive_count,
        negative = summary.negative_count,
        neutral = summary.neutral_count,
        "Scored news headlines"
    );

    SentimentReport {
        summary,
        articles: sample,
    }
}
