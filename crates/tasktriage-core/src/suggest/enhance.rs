//! Heuristic description enhancement.
//!
//! Appends a context block to a task description: the top keywords across
//! all snippets, plus the first snippet that looks related to the task
//! (contains the opening characters of the title).

use crate::analysis::extract_keywords;

const KEYWORD_LIMIT: usize = 6;
const SNIPPET_LIMIT: usize = 120;
/// How many leading title characters are used to probe for a related snippet.
/// Short titles degenerate into matching almost anything; that behavior is
/// kept as-is.
const TITLE_PROBE_LEN: usize = 12;

/// Truncate to at most `max` characters on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// First snippet containing the lowercased title's opening characters.
fn related_snippet<'a>(title: &str, context_texts: &'a [String]) -> Option<&'a str> {
    let title = title.to_lowercase();
    let probe = truncate_chars(&title, TITLE_PROBE_LEN).to_string();
    context_texts
        .iter()
        .find(|ctx| ctx.to_lowercase().contains(&probe))
        .map(|ctx| ctx.trim())
}

/// Append a `Context →` block to `description` when the snippets yield
/// keywords or a related snippet; otherwise return it unchanged.
pub fn enhance_description(title: &str, description: &str, context_texts: &[String]) -> String {
    let joined = context_texts.join(" \n");
    let keywords = extract_keywords(&joined, KEYWORD_LIMIT)
        .into_iter()
        .map(|(word, _)| word)
        .collect::<Vec<_>>()
        .join(", ");
    let snippet = related_snippet(title, context_texts).unwrap_or_default();

    let mut extras = Vec::new();
    if !keywords.is_empty() {
        extras.push(format!("Keywords: {keywords}"));
    }
    if !snippet.is_empty() {
        extras.push(format!("Related: {}", truncate_chars(snippet, SNIPPET_LIMIT)));
    }

    if extras.is_empty() {
        description.to_string()
    } else {
        format!("{description}\n\nContext → {}", extras.join("; "))
    }
}
