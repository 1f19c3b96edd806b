//! Manual grounding: keyword retrieval over the loaded Tally manual.

pub mod corpus;
pub mod query;
pub mod scorer;
pub mod snippet;

pub use corpus::{CorpusError, ManualCorpus, ManualDocument};
pub use query::SearchQuery;
pub use snippet::{ManualSnippet, MAX_SNIPPET_CHARS};

use std::sync::Arc;
use tracing::{debug, instrument};

/// Title used when the best document has none.
const FALLBACK_TITLE: &str = "Tally Manual";

/// Read-only retriever over a shared corpus. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ManualRetriever {
    corpus: Arc<ManualCorpus>,
}

impl ManualRetriever {
    pub fn new(corpus: Arc<ManualCorpus>) -> Self {
        Self { corpus }
    }

    /// Finds the single best excerpt for `query`, if any document scores.
    #[instrument(skip(self))]
    pub fn search(&self, query: Option<&str>) -> Option<ManualSnippet> {
        let query = SearchQuery::parse(query?)?;
        if self.corpus.is_empty() {
            return None;
        }

        let (document, scored) = scorer::best_match(&self.corpus, &query)?;
        let excerpt = snippet::trim_snippet(&document.learning, scored.matched_term.as_deref());
        if excerpt.is_empty() {
            return None;
        }

        let title = if document.title.trim().is_empty() {
            FALLBACK_TITLE.to_string()
        } else {
            document.title.clone()
        };

        debug!(
            title = %title,
            score = scored.score,
            matched = ?scored.matched_term,
            "Manual snippet selected"
        );

        Some(ManualSnippet {
            title,
            excerpt,
            score: scored.score,
        })
    }
}
