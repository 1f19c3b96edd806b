//! Lexical issue classification used to pick a fallback template.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issues shorter than this (in characters) carry too little signal.
const MIN_CLASSIFIABLE_CHARS: usize = 12;

pub const SYSTEM_KEYWORDS: &[&str] = &[
    "not opening",
    "won't open",
    "wont open",
    "unable to start",
    "startup",
    "crash",
    "crashing",
    "freezing",
    "freeze",
    "license",
    "licence",
    "activation",
    "blank screen",
    "install",
    "installation",
    "system",
    "login",
    "password",
    "error",
    "500",
    "access",
    "slow",
];

pub const FUNCTIONAL_KEYWORDS: &[&str] = &[
    "invoice",
    "gst",
    "tax",
    "ledger",
    "report",
    "reconcile",
    "recon",
    "stock",
    "inventory",
    "discount",
    "entry",
    "voucher",
    "sales",
    "purchase",
    "bill",
    "receipt",
    "bank",
    "import",
    "export",
    "screen",
    "flicker",
    "flickering",
    "display",
    "button",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCategory {
    #[serde(rename = "KNOWN_TALLY_FUNCTIONAL")]
    Functional,
    #[serde(rename = "SYSTEM_OR_ENVIRONMENT")]
    System,
    #[serde(rename = "UNKNOWN_OR_INSUFFICIENT")]
    Unknown,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functional => "KNOWN_TALLY_FUNCTIONAL",
            Self::System => "SYSTEM_OR_ENVIRONMENT",
            Self::Unknown => "UNKNOWN_OR_INSUFFICIENT",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets an issue summary. SYSTEM keywords are checked first, so an issue
/// matching both sets is SYSTEM.
pub fn classify_issue(issue: &str) -> IssueCategory {
    let normalized = issue.trim().to_lowercase();
    if normalized.chars().count() < MIN_CLASSIFIABLE_CHARS {
        return IssueCategory::Unknown;
    }

    let hits = |keywords: &[&str]| keywords.iter().any(|kw| normalized.contains(kw));

    if hits(SYSTEM_KEYWORDS) {
        IssueCategory::System
    } else if hits(FUNCTIONAL_KEYWORDS) {
        IssueCategory::Functional
    } else {
        IssueCategory::Unknown
    }
}
