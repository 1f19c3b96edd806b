//! Bounded manual excerpts.

use serde::{Deserialize, Serialize};

/// Longest excerpt, in characters, handed to the upstream or the client.
pub const MAX_SNIPPET_CHARS: usize = 1800;

const ELLIPSIS: &str = "...";

/// Best-matching manual excerpt for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualSnippet {
    pub title: String,
    pub excerpt: String,
    pub score: u32,
}

/// Cuts `text` down to a window of [`MAX_SNIPPET_CHARS`] around the first
/// occurrence of `term`, or around the midpoint when the term is absent.
///
/// Works on characters, not bytes, so multi-byte text never splits mid-char.
pub fn trim_snippet(text: &str, term: Option<&str>) -> String {
    let cleaned = text.trim();
    let chars: Vec<char> = cleaned.chars().collect();
    if chars.len() <= MAX_SNIPPET_CHARS {
        return cleaned.to_string();
    }

    let center = term
        .and_then(|term| find_case_insensitive(cleaned, term))
        .unwrap_or(chars.len() / 2);

    let start = center.saturating_sub(MAX_SNIPPET_CHARS / 2);
    let end = (start + MAX_SNIPPET_CHARS).min(chars.len());

    let mut snippet = String::with_capacity(MAX_SNIPPET_CHARS + 2 * ELLIPSIS.len());
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}

/// Character index in `haystack` of the first occurrence of `needle` after
/// `str::to_lowercase`, the same folding the scorer applies.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let byte = haystack.to_lowercase().find(needle)?;

    // Per-char lowercasing has the same UTF-8 length as the string form
    // (final sigma included), so byte offsets map back char by char.
    let mut lowered_len = 0;
    for (index, c) in haystack.chars().enumerate() {
        lowered_len += c.to_lowercase().map(char::len_utf8).sum::<usize>();
        if lowered_len > byte {
            return Some(index);
        }
    }
    None
}
