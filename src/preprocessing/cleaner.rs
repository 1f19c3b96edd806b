//! Whitespace normalisation shared by every "is this value usable" check.

/// Issue summary used when nothing usable could be extracted.
pub const DEFAULT_ISSUE_SUMMARY: &str = "your issue";

pub struct Cleaner;

impl Cleaner {
    /// Collapses every whitespace run to a single space and trims both ends.
    pub fn compact(input: &str) -> String {
        input.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// True when the value is empty or whitespace-only.
    pub fn is_blank(input: &str) -> bool {
        input.trim().is_empty()
    }

    /// Compacts whitespace and strips trailing colons/spaces.
    ///
    /// Returns `None` when nothing is left, so callers can decide whether
    /// to fall through to the next source or use the placeholder.
    pub fn try_sanitize(input: &str) -> Option<String> {
        let compact = Self::compact(input);
        let stripped = compact.trim_end_matches(|c: char| c == ' ' || c == ':');
        if stripped.is_empty() {
            None
        } else {
            Some(stripped.to_string())
        }
    }

    /// Sanitises an issue description, falling back to the placeholder.
    pub fn sanitize_issue(input: &str) -> String {
        Self::try_sanitize(input).unwrap_or_else(|| DEFAULT_ISSUE_SUMMARY.to_string())
    }
}
