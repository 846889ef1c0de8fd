//! News headline records.

use serde::{Deserialize, Serialize};

/// A news article as delivered by the upstream news feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Article URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Publication timestamp.
    #[serde(default)]
    pub published_date: Option<String>,
    /// Publishing site.
    #[serde(default)]
    pub site: Option<String>,
    /// Article snippet.
    #[serde(default)]
    pub text: Option<String>,
}

impl NewsArticle {
    /// The headline, or `""` when absent.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}
