//! Regulatory filing metadata records.
//!
//! These are pre-extracted search results, not filing bodies. Nothing in this
//! workspace parses the XML/HTML documents themselves.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Form type labels tracked by the workspace.
pub mod form {
    /// Annual report.
    pub const ANNUAL_REPORT: &str = "10-K";
    /// Quarterly report.
    pub const QUARTERLY_REPORT: &str = "10-Q";
    /// Statement of changes in beneficial ownership (insider transaction).
    pub const INSIDER_TRANSACTION: &str = "4";
    /// Beneficial ownership report of a 5%+ holder with activist intent.
    pub const ACTIVIST_STAKE: &str = "SC 13D";

    /// All tracked form types, in bucket order.
    pub const TRACKED: [&str; 4] = [
        ANNUAL_REPORT,
        QUARTERLY_REPORT,
        INSIDER_TRANSACTION,
        ACTIVIST_STAKE,
    ];
}

/// Metadata for a single filing.
///
/// All text fields are optional: the shape differs between form types and
/// providers frequently omit fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingRecord {
    /// Provider identifier of the filing.
    #[serde(default)]
    pub id: Option<String>,
    /// Ticker the filing was matched against.
    #[serde(default)]
    pub ticker: Option<String>,
    /// Name of the filer. For ownership reports this is the filing party.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Form type label, e.g. `"SC 13D"`.
    #[serde(default)]
    pub form_type: String,
    /// Free-text description supplied by the provider.
    #[serde(default)]
    pub description: Option<String>,
    /// Filing timestamp as sent by the provider.
    #[serde(default)]
    pub filed_at: Option<String>,
    /// Link to the filing index page.
    #[serde(default)]
    pub link_to_filing_details: Option<String>,
}

impl FilingRecord {
    /// The filer name, treating an empty string as absent.
    #[must_use]
    pub fn filer_name(&self) -> Option<&str> {
        non_empty(self.company_name.as_deref())
    }

    /// The filing timestamp, treating an empty string as absent.
    #[must_use]
    pub fn filed_at(&self) -> Option<&str> {
        non_empty(self.filed_at.as_deref())
    }

    /// The description, or `""` when absent.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// The link to the filing, treating an empty string as absent.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        non_empty(self.link_to_filing_details.as_deref())
    }

    /// Calendar date of the filing.
    ///
    /// Accepts RFC 3339 timestamps (`2024-01-15T16:05:21-05:00`) as well as
    /// plain `YYYY-MM-DD` dates.
    #[must_use]
    pub fn filed_date(&self) -> Option<NaiveDate> {
        let raw = self.filed_at()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Filings grouped into buckets by form type.
///
/// Looking up a form type with no bucket yields an empty slice; a missing
/// bucket is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilingsByType {
    buckets: BTreeMap<String, Vec<FilingRecord>>,
}

impl FilingsByType {
    /// Create an empty set of buckets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Group filings into the tracked form-type buckets.
    ///
    /// Every tracked bucket is present in the result, possibly empty. Filings
    /// of other form types are discarded. Order within a bucket follows input
    /// order.
    pub fn organize(filings: impl IntoIterator<Item = FilingRecord>) -> Self {
        let mut buckets: BTreeMap<String, Vec<FilingRecord>> = form::TRACKED
            .iter()
            .map(|f| ((*f).to_string(), Vec::new()))
            .collect();

        for filing in filings {
            if let Some(bucket) = buckets.get_mut(filing.form_type.as_str()) {
                bucket.push(filing);
            }
        }

        Self { buckets }
    }

    /// Append a filing to the bucket named by its form type.
    pub fn insert(&mut self, filing: FilingRecord) {
        self.buckets
            .entry(filing.form_type.clone())
            .or_default()
            .push(filing);
    }

    /// Filings of the given form type, or an empty slice.
    #[must_use]
    pub fn bucket(&self, form_type: &str) -> &[FilingRecord] {
        self.buckets
            .get(form_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The first (most recent, as delivered) filing of the given form type.
    #[must_use]
    pub fn first(&self, form_type: &str) -> Option<&FilingRecord> {
        self.bucket(form_type).first()
    }

    /// Total number of filings across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether there are no filings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filing(form_type: &str, id: &str) -> FilingRecord {
        FilingRecord {
            id: Some(id.to_string()),
            form_type: form_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_organize_keeps_tracked_forms_only() {
        let filings = FilingsByType::organize(vec![
            filing("4", "a"),
            filing("8-K", "b"),
            filing("SC 13D", "c"),
            filing("4", "d"),
        ]);

        assert_eq!(filings.len(), 3);
        let ids: Vec<_> = filings
            .bucket(form::INSIDER_TRANSACTION)
            .iter()
            .filter_map(|f| f.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert!(filings.bucket("8-K").is_empty());
        assert!(filings.bucket(form::ANNUAL_REPORT).is_empty());
    }

    #[test]
    fn test_missing_bucket_is_empty() {
        let filings = FilingsByType::new();
        assert!(filings.bucket(form::ACTIVIST_STAKE).is_empty());
        assert!(filings.first(form::ANNUAL_REPORT).is_none());
        assert!(filings.is_empty());
    }

    #[test]
    fn test_deserialize_grouped_map() {
        let json = r#"{"SC 13D": [{"id": "x", "companyName": "Elliott", "formType": "SC 13D"}]}"#;
        let filings: FilingsByType = serde_json::from_str(json).unwrap();
        let activist = filings.first(form::ACTIVIST_STAKE).unwrap();
        assert_eq!(activist.filer_name(), Some("Elliott"));
        assert!(filings.bucket(form::INSIDER_TRANSACTION).is_empty());
    }

    #[test]
    fn test_empty_text_fields_are_absent() {
        let record = FilingRecord {
            company_name: Some(String::new()),
            filed_at: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.filer_name(), None);
        assert_eq!(record.filed_at(), None);
        assert_eq!(record.description(), "");
        assert_eq!(record.link(), None);
    }

    #[test]
    fn test_filed_date_formats() {
        let timestamp = FilingRecord {
            filed_at: Some("2024-01-15T16:05:21-05:00".to_string()),
            ..Default::default()
        };
        assert_eq!(timestamp.filed_date(), NaiveDate::from_ymd_opt(2024, 1, 15));

        let plain = FilingRecord {
            filed_at: Some("2023-11-02".to_string()),
            ..Default::default()
        };
        assert_eq!(plain.filed_date(), NaiveDate::from_ymd_opt(2023, 11, 2));
    }
}
