//! Keyword scoring of manual documents against a query.

use super::corpus::{ManualCorpus, ManualDocument};
use super::query::SearchQuery;
use crate::preprocessing::Cleaner;

/// Points for a term found in the document title.
pub const TITLE_HIT: u32 = 6;
/// Points for a term found in the document body.
pub const BODY_HIT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentScore {
    pub score: u32,
    /// First term that hit the title, else the first that hit the body.
    pub matched_term: Option<String>,
}

/// Scores one document. Each term counts at most once per field.
pub fn score_document(document: &ManualDocument, query: &SearchQuery) -> DocumentScore {
    let title = document.title.to_lowercase();
    let body = document.learning.to_lowercase();

    let mut score = 0;
    let mut title_term: Option<&str> = None;
    let mut body_term: Option<&str> = None;

    for term in &query.terms {
        if title.contains(term.as_str()) {
            score += TITLE_HIT;
            title_term.get_or_insert(term.as_str());
        }
        if body.contains(term.as_str()) {
            score += BODY_HIT;
            body_term.get_or_insert(term.as_str());
        }
    }

    DocumentScore {
        score,
        matched_term: title_term.or(body_term).map(str::to_string),
    }
}

/// Highest-scoring document; ties keep the earliest one. Documents with a
/// blank body are never candidates.
pub fn best_match<'a>(
    corpus: &'a ManualCorpus,
    query: &SearchQuery,
) -> Option<(&'a ManualDocument, DocumentScore)> {
    let mut best: Option<(&ManualDocument, DocumentScore)> = None;

    for document in corpus.documents() {
        if Cleaner::is_blank(&document.learning) {
            continue;
        }
        let scored = score_document(document, query);
        let current = best.as_ref().map_or(0, |(_, s)| s.score);
        if scored.score > current {
            best = Some((document, scored));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(text: &str) -> SearchQuery {
        SearchQuery::parse(text).unwrap()
    }

    #[test]
    fn title_hits_outweigh_body_hits() {
        let doc = ManualDocument::new("GST Reports", "File returns using the GST portal and reports.");
        let scored = score_document(&doc, &query("gst reports"));
        assert_eq!(scored.score, 2 * TITLE_HIT + 2 * BODY_HIT);
        assert_eq!(scored.matched_term.as_deref(), Some("gst"));
    }

    #[test]
    fn matched_term_prefers_title_hit_over_earlier_body_hit() {
        let doc = ManualDocument::new("Ledger Masters", "Every invoice posts to a ledger.");
        let scored = score_document(&doc, &query("invoice ledger"));
        assert_eq!(scored.score, BODY_HIT + TITLE_HIT + BODY_HIT);
        assert_eq!(scored.matched_term.as_deref(), Some("ledger"));
    }

    #[test]
    fn repeated_occurrences_count_once() {
        let doc = ManualDocument::new("Sales", "invoice invoice invoice");
        assert_eq!(score_document(&doc, &query("invoice")).score, BODY_HIT);
    }

    #[test]
    fn ties_keep_first_document() {
        let corpus = ManualCorpus::new(vec![
            ManualDocument::new("First", "stock item details"),
            ManualDocument::new("Second", "stock item details"),
        ]);
        let (doc, scored) = best_match(&corpus, &query("stock")).unwrap();
        assert_eq!(doc.title, "First");
        assert_eq!(scored.score, BODY_HIT);
    }

    #[test]
    fn blank_bodies_and_zero_scores_are_skipped() {
        let corpus = ManualCorpus::new(vec![
            ManualDocument::new("Stock Summary", "   "),
            ManualDocument::new("Payroll", "Employee attendance"),
        ]);
        assert!(best_match(&corpus, &query("stock")).is_none());
    }
}
