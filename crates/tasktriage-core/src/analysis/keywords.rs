//! Keyword extraction.
//!
//! Tokenizes on whitespace, strips punctuation from token boundaries, and
//! ranks the remaining lowercase tokens by frequency. Ties keep first-seen
//! order (the sort is stable), so output order is fully deterministic.

/// Words too common to be useful as keywords.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "this", "that", "have", "has",
];

/// Punctuation stripped from token boundaries (not from the interior).
const BOUNDARY_PUNCT: &[char] = &['.', ',', ':', ';', '!', '?', '(', ')', '[', ']', '{', '}'];

/// Extract the `top_k` most frequent keywords from `text`.
///
/// Tokens of length <= 2 and stop words are skipped. Returns `(word, count)`
/// pairs sorted by descending count, ties broken by first occurrence.
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for raw in text.split_whitespace() {
        let token = raw.trim_matches(BOUNDARY_PUNCT).to_lowercase();
        if token.chars().count() <= 2 {
            continue;
        }
        if STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        match counts.iter_mut().find(|(word, _)| *word == token) {
            Some((_, count)) => *count += 1,
            None => counts.push((token, 1)),
        }
    }
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_k);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_ranks_by_frequency() {
        let kw = extract_keywords("deploy the build, deploy the fix", 8);
        assert_eq!(kw[0], ("deploy".to_string(), 2));
        assert!(kw.iter().any(|(w, n)| w == "build" && *n == 1));
    }

    #[test]
    fn strips_boundary_punctuation_and_lowercases() {
        let kw = extract_keywords("Review! (Review) review.", 8);
        assert_eq!(kw, vec![("review".to_string(), 3)]);
    }

    #[test]
    fn skips_stop_words_and_short_tokens() {
        let kw = extract_keywords("the and for it is ok groceries", 8);
        assert_eq!(kw, vec![("groceries".to_string(), 1)]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let kw = extract_keywords("alpha beta alpha beta gamma", 8);
        assert_eq!(kw[0].0, "alpha");
        assert_eq!(kw[1].0, "beta");
        assert_eq!(kw[2].0, "gamma");
    }

    #[test]
    fn respects_top_k_limit() {
        let kw = extract_keywords("one two three four five six seven eight nine", 3);
        assert_eq!(kw.len(), 3);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract_keywords("", 8).is_empty());
    }
}
