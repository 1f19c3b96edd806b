//! Pulls the customer's issue out of a heterogeneous `/ask` payload.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use super::cleaner::{Cleaner, DEFAULT_ISSUE_SUMMARY};
use super::request::AskRequest;

/// Persona hints at or under this word count are read as the issue itself.
const SHORT_PERSONA_MAX_WORDS: usize = 16;

/// Field names tried, in order, inside the screen context.
const FIELD_CANDIDATES: [&str; 5] = ["issue", "title", "description", "problem", "summary"];

fn customer_issue_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?is)Customer issue:\s*(.+)").expect("customer issue pattern is valid")
    })
}

pub struct IssueExtractor;

impl IssueExtractor {
    /// Derives the issue summary. Never fails and never returns an empty string.
    pub fn extract(request: &AskRequest) -> String {
        if let Some(issue) = Self::from_marker(Some(request.effective_question())) {
            debug!(source = "question", "Issue taken from marker");
            return issue;
        }

        if let Some(issue) = Self::from_marker(request.persona_prompt.as_deref()) {
            debug!(source = "persona_marker", "Issue taken from marker");
            return issue;
        }

        if let Some(persona) = request.persona_prompt.as_deref() {
            if let Some(short) = Cleaner::try_sanitize(persona) {
                if short.split_whitespace().count() <= SHORT_PERSONA_MAX_WORDS {
                    debug!(source = "persona", "Short persona hint used as issue");
                    return short;
                }
            }
        }

        if let Some(values) = request.field_values() {
            for key in FIELD_CANDIDATES {
                if let Some(issue) = values.get(key).and_then(|v| Cleaner::try_sanitize(v)) {
                    debug!(source = "field_values", key, "Issue taken from screen context");
                    return issue;
                }
            }
        }

        DEFAULT_ISSUE_SUMMARY.to_string()
    }

    /// Text following a `Customer issue:` marker, sanitised.
    fn from_marker(source: Option<&str>) -> Option<String> {
        let source = source.filter(|s| !Cleaner::is_blank(s))?;
        let captures = customer_issue_pattern().captures(source)?;
        Cleaner::try_sanitize(captures.get(1)?.as_str())
    }
}

/// Convenience wrapper around [`IssueExtractor::extract`].
pub fn extract_issue(request: &AskRequest) -> String {
    IssueExtractor::extract(request)
}
