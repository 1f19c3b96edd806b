//! Section contract checks for upstream answers.

use thiserror::Error;

/// Headers every answer must carry, each followed by some content.
pub const REQUIRED_SECTION_HEADERS: [&str; 3] = [
    "Issue Acknowledgement:",
    "Clarifying Question:",
    "Solution:",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("answer is empty")]
    Empty,
    #[error("missing section `{0}`")]
    MissingSection(&'static str),
    #[error("section `{0}` has no content")]
    EmptySection(&'static str),
}

/// All headers occur somewhere, in any order.
pub fn has_required_sections(answer: &str) -> bool {
    missing_section(answer).is_none()
}

/// Every header is followed by non-blank text before the next header.
pub fn sections_non_empty(answer: &str) -> bool {
    empty_section(answer).is_none()
}

pub fn is_valid_answer(answer: &str) -> bool {
    validate_answer(answer).is_ok()
}

/// Same decision as [`is_valid_answer`], reporting the first violation.
pub fn validate_answer(answer: &str) -> Result<(), ContractViolation> {
    if answer.trim().is_empty() {
        return Err(ContractViolation::Empty);
    }
    if let Some(header) = missing_section(answer) {
        return Err(ContractViolation::MissingSection(header));
    }
    if let Some(header) = empty_section(answer) {
        return Err(ContractViolation::EmptySection(header));
    }
    Ok(())
}

fn missing_section(answer: &str) -> Option<&'static str> {
    REQUIRED_SECTION_HEADERS
        .into_iter()
        .find(|header| !answer.contains(header))
}

fn empty_section(answer: &str) -> Option<&'static str> {
    REQUIRED_SECTION_HEADERS
        .into_iter()
        .find(|header| !section_body(answer, header).is_some_and(|body| !body.trim().is_empty()))
}

/// Text between the first occurrence of `header` and the nearest following
/// occurrence of any other required header, or the end of the answer.
fn section_body<'a>(answer: &'a str, header: &str) -> Option<&'a str> {
    let start = answer.find(header)? + header.len();
    let end = REQUIRED_SECTION_HEADERS
        .iter()
        .filter(|other| **other != header)
        .filter_map(|other| answer[start..].find(other).map(|pos| start + pos))
        .min()
        .unwrap_or(answer.len());
    Some(&answer[start..end])
}
