//! Urgency scoring.
//!
//! A crude bag-of-keywords additive score: every table keyword found in the
//! task text adds its full weight, every keyword found in a context snippet
//! adds a reduced weight, and the total is capped at 2.0. No normalization by
//! text length; each distinct keyword counts at most once per text (presence,
//! not frequency), but multiple snippets compound.

/// Time-pressure keywords and their weights.
pub const URGENCY_KEYWORDS: &[(&str, f64)] = &[
    ("urgent", 1.0),
    ("asap", 0.95),
    ("today", 0.85),
    ("tomorrow", 0.65),
    ("immediately", 1.0),
    ("deadline", 0.9),
    ("overdue", 1.0),
];

/// Context snippets contribute at reduced strength.
const CONTEXT_WEIGHT: f64 = 0.15;

/// Score time pressure for a task in `[0.0, 2.0]`.
///
/// Scans the lowercased `title + " " + description` for urgency keywords
/// (substring match), then every context text at [`CONTEXT_WEIGHT`] strength.
pub fn keyword_urgency(title: &str, description: &str, context_texts: &[String]) -> f64 {
    let text = format!("{title} {description}").to_lowercase();
    let mut score = 0.0;
    for &(word, weight) in URGENCY_KEYWORDS {
        if text.contains(word) {
            score += weight;
        }
    }
    for ctx in context_texts {
        let ctx = ctx.to_lowercase();
        for &(word, weight) in URGENCY_KEYWORDS {
            if ctx.contains(word) {
                score += weight * CONTEXT_WEIGHT;
            }
        }
    }
    score.min(2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keywords_scores_zero() {
        assert_eq!(keyword_urgency("water the plants", "", &[]), 0.0);
    }

    #[test]
    fn task_keywords_add_up() {
        // urgent (1.0) + deadline (0.9)
        let score = keyword_urgency("URGENT", "deadline is close", &[]);
        assert!((score - 1.9).abs() < 1e-9);
    }

    #[test]
    fn repeated_keyword_counts_once_per_text() {
        let once = keyword_urgency("urgent", "", &[]);
        let thrice = keyword_urgency("urgent urgent urgent", "", &[]);
        assert_eq!(once, thrice);
    }

    #[test]
    fn context_contributes_at_reduced_strength() {
        let ctx = vec!["this is urgent".to_string()];
        let score = keyword_urgency("water the plants", "", &ctx);
        assert!((score - 0.15).abs() < 1e-9);
    }

    #[test]
    fn multiple_snippets_compound() {
        let ctx = vec!["urgent".to_string(), "urgent".to_string()];
        let score = keyword_urgency("water the plants", "", &ctx);
        assert!((score - 0.30).abs() < 1e-9);
    }

    #[test]
    fn total_is_capped_at_two() {
        let score = keyword_urgency(
            "urgent asap today tomorrow",
            "immediately deadline overdue",
            &[],
        );
        assert_eq!(score, 2.0);
    }
}
