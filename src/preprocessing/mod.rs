//! Request-side processing: payload model, whitespace cleaning, issue extraction.

pub mod cleaner;
pub mod extractor;
pub mod request;

pub use cleaner::{Cleaner, DEFAULT_ISSUE_SUMMARY};
pub use extractor::{extract_issue, IssueExtractor};
pub use request::{AskRequest, ScreenContext};

#[cfg(test)]
mod tests;
