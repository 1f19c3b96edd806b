//! Deterministic, contract-compliant answers used when the upstream answer
//! cannot be passed through.

use std::borrow::Cow;

use crate::postprocessing::validator::REQUIRED_SECTION_HEADERS;
use crate::postprocessing::IssueCategory;

/// Final step of every branch that hands the case to a human.
pub const ESCALATION_MESSAGE: &str =
    "This issue needs review by a support executive to ensure it’s resolved correctly. \
     I’ve noted this under your ticket, and our support team will assist you shortly.";

/// Builds the three-section answer for `category`, substituting `issue`
/// wherever the template refers to the reported problem.
///
/// The issue is inserted verbatim except for section headers inside it,
/// whose colon becomes " -" so the result always validates.
pub fn synthesize(issue: &str, category: IssueCategory) -> String {
    let issue = neutralize_headers(issue);
    let issue: &str = &issue;
    let sections = match category {
        IssueCategory::Functional => functional(issue),
        IssueCategory::System => system(issue),
        IssueCategory::Unknown => unknown(issue),
    };
    sections.join("\n\n")
}

fn neutralize_headers(issue: &str) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(issue);
    for header in REQUIRED_SECTION_HEADERS {
        if text.contains(header) {
            let label = header.trim_end_matches(':');
            text = Cow::Owned(text.replace(header, &format!("{label} -")));
        }
    }
    text
}

fn functional(issue: &str) -> [String; 3] {
    [
        format!(
            "Issue Acknowledgement:\n\
             • I understand you're facing an issue with {issue} and need functional guidance."
        ),
        format!(
            "Clarifying Question:\n\
             • When {issue} shows up, does it happen while:\n  \
             A) You're entering or saving the data that leads to {issue}\n  \
             B) You're reviewing, exporting, or sharing an existing record/report affected by {issue}"
        ),
        format!(
            "Solution:\n\
             If A):\n\
             - Step 1: Re-open the exact form that led to {issue} and validate every ledger, stock item, and tax field.\n\
             - Step 2: Remove any highlighted rows, re-enter the values slowly, and confirm numbering/rounding rules.\n\
             - Step 3: Save again and note the precise error wording if it repeats.\n\n\
             If B):\n\
             - Step 1: Open the saved document/report tied to {issue} and confirm totals and filters look correct.\n\
             - Step 2: Export to PDF first; if the export works but print/email fails, reset the print/report profile.\n\
             - Step 3: Refresh or re-sync the data and export the report again."
        ),
    ]
}

fn system(issue: &str) -> [String; 3] {
    [
        format!(
            "Issue Acknowledgement:\n\
             • I understand you're facing an issue with {issue}, which points to a system or environment concern."
        ),
        format!(
            "Clarifying Question:\n\
             • When {issue} happens, which scenario matches best?\n  \
             A) Tally never launches or stays stuck/blank while you're dealing with {issue}\n  \
             B) Tally opens but immediately throws an error, freezes, or forces a login failure around {issue}"
        ),
        format!(
            "Solution:\n\
             If A):\n\
             - Step 1: Close Tally, restart Windows, and try launching again to rule out a locked session behind {issue}.\n\
             - Step 2: Attempt opening in educational mode; if that also fails, the installation or license needs inspection.\n\
             - Step 3: {ESCALATION_MESSAGE}\n\n\
             If B):\n\
             - Step 1: Capture the exact error, login prompt, or crash message shown during {issue}.\n\
             - Step 2: Avoid repeated retries so the current logs remain intact for diagnosis.\n\
             - Step 3: {ESCALATION_MESSAGE}"
        ),
    ]
}

fn unknown(issue: &str) -> [String; 3] {
    [
        format!(
            "Issue Acknowledgement:\n\
             • I understand you're seeing {issue}, but the details are limited."
        ),
        format!(
            "Clarifying Question:\n\
             • To help with {issue}, could you clarify whether:\n  \
             A) A specific in-app action immediately triggers {issue}\n  \
             B) {issue} appears intermittently and you’re unsure what led to it"
        ),
        format!(
            "Solution:\n\
             If A):\n\
             - Step 1: Share any on-screen error text or recent configuration/data changes before {issue} occurred.\n\
             - Step 2: Reproduce it once more, noting the exact menu path so it can be replicated.\n\
             - Step 3: {ESCALATION_MESSAGE}\n\n\
             If B):\n\
             - Step 1: Provide the ticket ID plus what you’ve already tried for {issue} so steps aren't repeated.\n\
             - Step 2: Mention whether {issue} blocks daily work so the case can be prioritised.\n\
             - Step 3: {ESCALATION_MESSAGE}"
        ),
    ]
}
