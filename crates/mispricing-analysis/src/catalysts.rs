//! Catalyst guideposts from filing metadata.
//!
//! The scan produces, in order:
//! 1. One activism guidepost per SC 13D filing
//! 2. One insider guidepost per Form 4 filing the [`InsiderClassifier`] flags
//!    as a purchase
//! 3. The standing operational and financial guideposts
//!
//! Every guidepost is created with status `pending`. Nothing here transitions
//! a status; that belongs to whoever tracks the guideposts over time.

use mispricing_traits::{FilingRecord, FilingsByType, InsiderClassifier, form};
use serde::{Deserialize, Serialize};

/// Kind of catalyst a guidepost represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalystKind {
    /// An activist holder has disclosed a stake.
    Activism,
    /// Insiders are buying.
    Insider,
    /// Operating improvement.
    Operational,
    /// Capital allocation.
    Financial,
}

/// Lifecycle status of a guidepost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidepostStatus {
    /// Not yet confirmed or invalidated.
    Pending,
}

/// A qualitative signal that may precede a re-rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalystGuidepost {
    /// Identifier: the filing id for filing-derived guideposts.
    pub id: Option<String>,
    /// Catalyst kind.
    #[serde(rename = "type")]
    pub kind: CatalystKind,
    /// Lifecycle status.
    pub status: GuidepostStatus,
    /// Human-readable evidence.
    pub evidence: String,
    /// Link to the supporting filing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CatalystGuidepost {
    /// Create a pending guidepost.
    #[must_use]
    pub const fn pending(
        id: Option<String>,
        kind: CatalystKind,
        evidence: String,
        link: Option<String>,
    ) -> Self {
        Self {
            id,
            kind,
            status: GuidepostStatus::Pending,
            evidence,
            link,
        }
    }

    fn from_filing(filing: &FilingRecord, kind: CatalystKind, evidence: String) -> Self {
        Self::pending(
            filing.id.clone(),
            kind,
            evidence,
            Some(filing.link().unwrap_or(MISSING_LINK).to_string()),
        )
    }
}

const MISSING_LINK: &str = "#";
const UNKNOWN_ACTIVIST: &str = "An activist";
const UNKNOWN_DATE: &str = "N/A";

/// A guidepost appended to every scan regardless of filings.
#[derive(Debug)]
struct StandingCatalyst {
    id: &'static str,
    kind: CatalystKind,
    evidence: &'static str,
}

const STANDING_CATALYSTS: [StandingCatalyst; 2] = [
    StandingCatalyst {
        id: "op1",
        kind: CatalystKind::Operational,
        evidence: "Potential for margin expansion if input costs normalize.",
    },
    StandingCatalyst {
        id: "fin1",
        kind: CatalystKind::Financial,
        evidence: "Company has a history of opportunistic share repurchases.",
    },
];

/// Flags a Form 4 as a purchase when its description mentions "purchase" or
/// "buy", ignoring case.
///
/// This approximates the Form 4 transaction code (`P` for open-market
/// purchase) from free text. It will miss purchases described otherwise and
/// flag descriptions that merely mention buying. Parsing the transaction
/// table of the filing itself would be exact; substitute another
/// [`InsiderClassifier`] to do that.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordInsiderClassifier;

impl KeywordInsiderClassifier {
    const KEYWORDS: [&'static str; 2] = ["purchase", "buy"];
}

impl InsiderClassifier for KeywordInsiderClassifier {
    fn is_purchase(&self, filing: &FilingRecord) -> bool {
        let description = filing.description().to_lowercase();
        Self::KEYWORDS.iter().any(|k| description.contains(k))
    }
}

/// Scans grouped filings for catalysts.
#[derive(Debug, Clone, Default)]
pub struct CatalystScanner<C = KeywordInsiderClassifier> {
    classifier: C,
}

impl<C: InsiderClassifier> CatalystScanner<C> {
    /// Create a scanner with a custom insider classifier.
    #[must_use]
    pub const fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Produce guideposts for the given filings.
    ///
    /// Missing buckets are treated as empty. The two standing guideposts are
    /// always last.
    #[must_use]
    pub fn scan(&self, filings: &FilingsByType) -> Vec<CatalystGuidepost> {
        let activism = filings.bucket(form::ACTIVIST_STAKE).iter().map(|f| {
            let evidence = format!(
                "{} filed an SC 13D on {}. [View Filing]",
                f.filer_name().unwrap_or(UNKNOWN_ACTIVIST),
                f.filed_at().unwrap_or(UNKNOWN_DATE),
            );
            CatalystGuidepost::from_filing(f, CatalystKind::Activism, evidence)
        });

        let insider = filings
            .bucket(form::INSIDER_TRANSACTION)
            .iter()
            .filter(|f| self.classifier.is_purchase(f))
            .map(|f| {
                let evidence = format!(
                    "Insider transaction (purchase) reported on {}. [View Filing]",
                    f.filed_at().unwrap_or(UNKNOWN_DATE),
                );
                CatalystGuidepost::from_filing(f, CatalystKind::Insider, evidence)
            });

        let standing = STANDING_CATALYSTS.iter().map(|c| {
            CatalystGuidepost::pending(Some(c.id.to_string()), c.kind, c.evidence.to_string(), None)
        });

        let guideposts: Vec<_> = activism.chain(insider).chain(standing).collect();
        tracing::debug!(
            count = guideposts.len(),
            filings = filings.len(),
            "Scanned filings for catalysts"
        );
        guideposts
    }
}

/// Scan filings with the keyword insider classifier.
#[must_use]
pub fn find_catalysts(filings: &FilingsByType) -> Vec<CatalystGuidepost> {
    CatalystScanner::<KeywordInsiderClassifier>::default().scan(filings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filing(form_type: &str, id: &str) -> FilingRecord {
        FilingRecord {
            id: Some(id.to_string()),
            form_type: form_type.to_string(),
            filed_at: Some("2024-03-01".to_string()),
            link_to_filing_details: Some(format!("https://sec.gov/{id}")),
            ..Default::default()
        }
    }

    fn insider(id: &str, description: &str) -> FilingRecord {
        FilingRecord {
            description: Some(description.to_string()),
            ..filing(form::INSIDER_TRANSACTION, id)
        }
    }

    #[test]
    fn test_empty_filings_yield_standing_guideposts() {
        let guideposts = find_catalysts(&FilingsByType::new());

        assert_eq!(guideposts.len(), 2);
        assert_eq!(guideposts[0].kind, CatalystKind::Operational);
        assert_eq!(guideposts[0].id.as_deref(), Some("op1"));
        assert_eq!(
            guideposts[0].evidence,
            "Potential for margin expansion if input costs normalize."
        );
        assert_eq!(guideposts[1].kind, CatalystKind::Financial);
        assert_eq!(guideposts[1].id.as_deref(), Some("fin1"));
        assert_eq!(
            guideposts[1].evidence,
            "Company has a history of opportunistic share repurchases."
        );
        assert!(guideposts.iter().all(|g| g.link.is_none()));
        assert!(guideposts.iter().all(|g| g.status == GuidepostStatus::Pending));
    }

    #[test]
    fn test_activist_filing() {
        let mut filings = FilingsByType::new();
        filings.insert(FilingRecord {
            company_name: Some("Starboard Value LP".to_string()),
            ..filing(form::ACTIVIST_STAKE, "13d-1")
        });

        let guideposts = find_catalysts(&filings);
        assert_eq!(guideposts.len(), 3);

        let activism = &guideposts[0];
        assert_eq!(activism.kind, CatalystKind::Activism);
        assert_eq!(activism.id.as_deref(), Some("13d-1"));
        assert_eq!(
            activism.evidence,
            "Starboard Value LP filed an SC 13D on 2024-03-01. [View Filing]"
        );
        assert_eq!(activism.link.as_deref(), Some("https://sec.gov/13d-1"));
    }

    #[test]
    fn test_activist_fallbacks() {
        let mut filings = FilingsByType::new();
        filings.insert(FilingRecord {
            form_type: form::ACTIVIST_STAKE.to_string(),
            company_name: Some(String::new()),
            ..Default::default()
        });

        let guideposts = find_catalysts(&filings);
        assert_eq!(
            guideposts[0].evidence,
            "An activist filed an SC 13D on N/A. [View Filing]"
        );
        assert_eq!(guideposts[0].link.as_deref(), Some("#"));
        assert_eq!(guideposts[0].id, None);
    }

    #[test]
    fn test_insider_keyword_match_is_case_insensitive() {
        let mut filings = FilingsByType::new();
        filings.insert(insider("f4-1", "Open market PURCHASE of common stock"));
        filings.insert(insider("f4-2", "Sale of shares under 10b5-1 plan"));
        filings.insert(insider("f4-3", "Director Buys Shares"));
        filings.insert(FilingRecord {
            description: None,
            ..filing(form::INSIDER_TRANSACTION, "f4-4")
        });

        let guideposts = find_catalysts(&filings);
        let insider_ids: Vec<_> = guideposts
            .iter()
            .filter(|g| g.kind == CatalystKind::Insider)
            .filter_map(|g| g.id.as_deref())
            .collect();
        assert_eq!(insider_ids, vec!["f4-1", "f4-3"]);
        assert_eq!(
            guideposts[0].evidence,
            "Insider transaction (purchase) reported on 2024-03-01. [View Filing]"
        );
    }

    #[test]
    fn test_insider_without_filing_date() {
        let mut filings = FilingsByType::new();
        filings.insert(FilingRecord {
            filed_at: None,
            ..insider("f4-9", "purchase")
        });

        let guideposts = find_catalysts(&filings);
        assert_eq!(guideposts.len(), 3);
        assert_eq!(guideposts[0].kind, CatalystKind::Insider);
        assert_eq!(
            guideposts[0].evidence,
            "Insider transaction (purchase) reported on N/A. [View Filing]"
        );
        assert_eq!(guideposts[0].link.as_deref(), Some("https://sec.gov/f4-9"));
        assert_eq!(guideposts[0].id.as_deref(), Some("f4-9"));
    }

    #[test]
    fn test_output_order_activism_insider_standing() {
        let mut filings = FilingsByType::new();
        filings.insert(insider("f4-1", "purchase"));
        filings.insert(filing(form::ACTIVIST_STAKE, "13d-1"));
        filings.insert(filing(form::ANNUAL_REPORT, "10k-1"));

        let kinds: Vec<_> = find_catalysts(&filings).iter().map(|g| g.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CatalystKind::Activism,
                CatalystKind::Insider,
                CatalystKind::Operational,
                CatalystKind::Financial,
            ]
        );
    }

    #[test]
    fn test_custom_classifier() {
        let mut filings = FilingsByType::new();
        filings.insert(insider("f4-1", "code P"));
        filings.insert(insider("f4-2", "purchase"));

        let scanner = CatalystScanner::new(|f: &FilingRecord| f.description().ends_with(" P"));
        let guideposts = scanner.scan(&filings);

        assert_eq!(guideposts.len(), 3);
        assert_eq!(guideposts[0].id.as_deref(), Some("f4-1"));
    }

    #[test]
    fn test_serialized_shape() {
        let guideposts = find_catalysts(&FilingsByType::new());
        let json = serde_json::to_value(&guideposts[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "op1",
                "type": "Operational",
                "status": "pending",
                "evidence": "Potential for margin expansion if input costs normalize."
            })
        );
    }
}
