//! Final polish of the upstream answer before it reaches the client.

pub mod classifier;
pub mod validator;

pub use classifier::{classify_issue, IssueCategory};
pub use validator::{
    has_required_sections, is_valid_answer, sections_non_empty, validate_answer,
    ContractViolation, REQUIRED_SECTION_HEADERS,
};

use crate::engine::output::{append_reference, synthesize};
use crate::engine::retrieval::ManualSnippet;
use tracing::{debug, info};

/// Answer handed back to the client, plus how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub answer: String,
    /// Category of the template used, or `None` when upstream passed through.
    pub synthesized: Option<IssueCategory>,
}

/// Passes a contract-compliant answer through; otherwise rebuilds one from
/// the issue summary and cites the manual snippet when there is one.
pub fn normalize_response(
    issue: &str,
    raw_answer: &str,
    snippet: Option<&ManualSnippet>,
) -> Normalized {
    let answer = raw_answer.trim();
    match validate_answer(answer) {
        Ok(()) => {
            debug!("Upstream answer satisfies the section contract");
            Normalized {
                answer: answer.to_string(),
                synthesized: None,
            }
        }
        Err(violation) => {
            let category = classify_issue(issue);
            info!(%violation, %category, "Synthesizing structured answer");
            Normalized {
                answer: append_reference(&synthesize(issue, category), snippet),
                synthesized: Some(category),
            }
        }
    }
}
