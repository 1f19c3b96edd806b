//! Lowercased, tokenised manual query.

use crate::preprocessing::Cleaner;

const MIN_QUERY_CHARS: usize = 4;
const MIN_TERM_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub terms: Vec<String>,
}

impl SearchQuery {
    /// Builds a query, or `None` when the text carries too little signal.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = Cleaner::compact(raw).to_lowercase();
        if text.chars().count() < MIN_QUERY_CHARS {
            return None;
        }

        let terms: Vec<String> = text
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '/'))
            .filter(|term| term.chars().count() >= MIN_TERM_CHARS)
            .map(str::to_string)
            .collect();

        if terms.is_empty() {
            return None;
        }
        Some(Self { terms })
    }
}
