//! General-purpose lexicon polarity scorer.

use mispricing_traits::PolarityScorer;
use std::collections::HashMap;

/// Words that flip the polarity of the next sentiment word.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "without", "cannot", "can't", "cant", "don't",
    "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "aren't", "arent",
    "wasn't", "wasnt", "weren't", "werent", "won't", "wont", "wouldn't", "wouldnt",
    "shouldn't", "shouldnt", "couldn't", "couldnt", "hardly", "barely",
];

/// How many tokens a negation reaches forward.
const NEGATION_WINDOW: usize = 3;

/// A negated word keeps half its magnitude with the sign flipped.
const NEGATION_FACTOR: f64 = -0.5;

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("significantly", 1.3),
    ("sharply", 1.4),
    ("dramatically", 1.5),
    ("deeply", 1.3),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("marginally", 0.5),
];

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("positive", 0.3),
    ("strong", 0.5),
    ("solid", 0.4),
    ("success", 0.6),
    ("successful", 0.7),
    ("win", 0.6),
    ("gain", 0.5),
    ("profit", 0.6),
    ("profitable", 0.6),
    ("growth", 0.6),
    ("grow", 0.5),
    ("rise", 0.5),
    ("increase", 0.4),
    ("improve", 0.5),
    ("boost", 0.5),
    ("surge", 0.7),
    ("soar", 0.8),
    ("rally", 0.7),
    ("jump", 0.5),
    ("record", 0.6),
    ("beat", 0.6),
    ("exceed", 0.6),
    ("outperform", 0.7),
    ("upgrade", 0.6),
    ("bullish", 0.8),
    ("optimistic", 0.6),
    ("confident", 0.5),
    ("buy", 0.5),
    ("recovery", 0.5),
    ("rebound", 0.5),
    ("breakthrough", 0.7),
    ("happy", 0.8),
    ("love", 0.5),
    ("impressive", 1.0),
    ("attractive", 0.6),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("poor", -0.4),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("negative", -0.3),
    ("weak", -0.5),
    ("fail", -0.7),
    ("failure", -0.7),
    ("loss", -0.6),
    ("lose", -0.5),
    ("decline", -0.6),
    ("drop", -0.6),
    ("fall", -0.5),
    ("decrease", -0.4),
    ("plunge", -0.8),
    ("crash", -0.9),
    ("slump", -0.7),
    ("tumble", -0.7),
    ("miss", -0.6),
    ("disappoint", -0.7),
    ("underperform", -0.6),
    ("downgrade", -0.6),
    ("bearish", -0.8),
    ("pessimistic", -0.6),
    ("sell", -0.4),
    ("concern", -0.5),
    ("worry", -0.5),
    ("fear", -0.6),
    ("risk", -0.3),
    ("uncertainty", -0.5),
    ("warning", -0.5),
    ("crisis", -0.8),
    ("trouble", -0.6),
    ("lawsuit", -0.5),
    ("probe", -0.4),
    ("fraud", -0.9),
    ("bankruptcy", -0.9),
    ("layoff", -0.5),
];

/// Scores text by averaging the polarity of the lexicon words it contains.
///
/// Tokens are matched case-insensitively, with simple suffix stripping
/// (`-s`, `-es`, `-ed`, `-d`, `-ing`) as a fallback. A negation word within
/// three tokens before a sentiment word flips and halves it; an intensifier
/// immediately before scales it. The result is clamped to `[-1.0, 1.0]`, and
/// text with no lexicon words scores `0.0`.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Create a scorer with the built-in lexicon.
    #[must_use]
    pub fn new() -> Self {
        let words = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(w, s)| ((*w).to_string(), *s))
            .collect();
        let intensifiers = INTENSIFIERS
            .iter()
            .map(|(w, m)| ((*w).to_string(), *m))
            .collect();

        Self {
            words,
            intensifiers,
        }
    }

    /// Add or replace a word in the lexicon.
    #[must_use]
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.words
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    /// Number of sentiment words in the lexicon.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no sentiment words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn lookup(&self, token: &str) -> Option<f64> {
        if let Some(score) = self.words.get(token) {
            return Some(*score);
        }
        ["ing", "es", "ed", "s", "d"]
            .iter()
            .filter_map(|suffix| token.strip_suffix(suffix))
            .filter(|stem| stem.len() > 2)
            .find_map(|stem| self.words.get(stem).copied())
    }

    fn score(&self, text: &str) -> f64 {
        let mut scores = Vec::new();
        let mut negation_reach = 0usize;
        let mut multiplier = 1.0;

        let tokens = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        for token in tokens {
            if NEGATIONS.contains(&token.as_str()) {
                negation_reach = NEGATION_WINDOW;
                continue;
            }
            if let Some(m) = self.intensifiers.get(&token) {
                multiplier = *m;
                continue;
            }

            match self.lookup(&token) {
                Some(mut score) => {
                    if negation_reach > 0 {
                        score *= NEGATION_FACTOR;
                        negation_reach = 0;
                    }
                    scores.push(score * multiplier);
                }
                None => negation_reach = negation_reach.saturating_sub(1),
            }
            multiplier = 1.0;
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        self.score(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lexicon_is_populated() {
        let scorer = LexiconScorer::new();
        assert!(!scorer.is_empty());
        assert_eq!(scorer.len(), POSITIVE_WORDS.len() + NEGATIVE_WORDS.len());
    }

    #[test]
    fn test_positive_and_negative_headlines() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("Apple posts record profit as iPhone sales surge") > 0.1);
        assert!(scorer.polarity("Retailer shares tumble after earnings miss") < -0.1);
    }

    #[test]
    fn test_no_lexicon_words_scores_zero() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.polarity("Board schedules annual meeting"), 0.0);
        assert_eq!(scorer.polarity(""), 0.0);
    }

    #[test]
    fn test_suffix_fallback() {
        let scorer = LexiconScorer::new();
        assert_relative_eq!(scorer.polarity("Shares surged"), 0.7);
        assert_relative_eq!(scorer.polarity("Results disappointing"), -0.7);
        assert_relative_eq!(scorer.polarity("Analysts upgrades"), 0.6);
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        let scorer = LexiconScorer::new();
        assert_relative_eq!(scorer.polarity("good"), 0.7);
        assert_relative_eq!(scorer.polarity("not good"), -0.35);
        assert_relative_eq!(scorer.polarity("not a very good quarter"), -0.35 * 1.3);
    }

    #[test]
    fn test_negation_window_expires() {
        let scorer = LexiconScorer::new();
        assert_relative_eq!(scorer.polarity("no word here at all good"), 0.7);
    }

    #[test]
    fn test_intensifier() {
        let scorer = LexiconScorer::new();
        assert_relative_eq!(scorer.polarity("slightly weak"), -0.25);
    }

    #[test]
    fn test_result_is_clamped() {
        let scorer = LexiconScorer::new();
        let score = scorer.polarity("extremely excellent");
        assert_relative_eq!(score, 1.0);
    }

    #[test]
    fn test_custom_word() {
        let scorer = LexiconScorer::new().with_word("Delisted", -2.0);
        assert_relative_eq!(scorer.polarity("stock delisted"), -1.0);
    }
}
