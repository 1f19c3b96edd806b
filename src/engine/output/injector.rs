//! Injects manual excerpts into outbound questions and fallback answers.

use crate::engine::retrieval::ManualSnippet;

/// Usable excerpt of a snippet, or `None` when there is nothing to cite.
fn usable(snippet: Option<&ManualSnippet>) -> Option<(&str, &str)> {
    let snippet = snippet?;
    let excerpt = snippet.excerpt.trim();
    if excerpt.is_empty() {
        None
    } else {
        Some((snippet.title.as_str(), excerpt))
    }
}

/// Appends the grounding addendum the upstream model is asked to honour.
pub fn attach_grounding(question: &str, snippet: Option<&ManualSnippet>) -> String {
    let Some((title, excerpt)) = usable(snippet) else {
        return question.to_string();
    };

    format!(
        "{}\n\n\
         ---\n\
         You also have access to the following verified knowledge from the official Tally manual.\n\
         Title: {title}\n\
         Excerpt:\n{excerpt}\n\
         ---\n\
         Ground every factual statement in this knowledge excerpt when it is relevant, \
         and prefer escalation if the excerpt does not answer the question.",
        question.trim_end()
    )
}

/// Appends a "Reference Knowledge" block citing the snippet.
pub fn append_reference(answer: &str, snippet: Option<&ManualSnippet>) -> String {
    let Some((title, excerpt)) = usable(snippet) else {
        return answer.to_string();
    };

    format!(
        "{}\n\nReference Knowledge:\n• Source: {title}\n{excerpt}",
        answer.trim_end()
    )
}
