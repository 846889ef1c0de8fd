//! Psychological checklist for contrarian analysis.
//!
//! A fixed table of cognitive biases to check before acting on an apparent
//! mispricing.

use serde::Serialize;

/// One bias and the question that tests for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    /// Name of the bias.
    pub bias: &'static str,
    /// Question to ask about the current market view.
    pub question: &'static str,
}

const MUNGER_CHECKLIST: [ChecklistItem; 2] = [
    ChecklistItem {
        bias: "Social Proof & Authority",
        question: "Is the market's view driven by herd behavior or a few influential analysts?",
    },
    ChecklistItem {
        bias: "Availability & Recency",
        question: "Is a recent negative event being extrapolated indefinitely into the future?",
    },
];

/// The Munger-inspired checklist.
#[must_use]
pub const fn munger_checklist() -> &'static [ChecklistItem] {
    &MUNGER_CHECKLIST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_contents() {
        let checklist = munger_checklist();
        assert_eq!(checklist.len(), 2);
        assert_eq!(checklist[0].bias, "Social Proof & Authority");
        assert_eq!(checklist[1].bias, "Availability & Recency");
        assert!(checklist.iter().all(|item| item.question.ends_with('?')));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(munger_checklist()).unwrap();
        assert_eq!(json[0]["bias"], "Social Proof & Authority");
        assert!(json[1]["question"].is_string());
    }
}
