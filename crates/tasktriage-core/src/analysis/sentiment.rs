//! Sentiment scoring over fixed word sets.

const POSITIVE_WORDS: &[&str] = &["good", "great", "thanks", "appreciate", "happy"];
const NEGATIVE_WORDS: &[&str] = &["issue", "problem", "delay", "blocked", "angry", "urgent"];

/// Score the sentiment of `text` in `[-1.0, 1.0]`.
///
/// Counts positive and negative word hits (substring containment against the
/// lowercased text, each word at most once) and returns
/// `(pos - neg) / max(pos + neg, 1)`. Text with no hits scores exactly `0.0`.
pub fn analyze_sentiment(text: &str) -> f64 {
    let text = text.to_lowercase();
    let pos = POSITIVE_WORDS
        .iter()
        .filter(|&&word| text.contains(word))
        .count() as i64;
    let neg = NEGATIVE_WORDS
        .iter()
        .filter(|&&word| text.contains(word))
        .count() as i64;
    if pos == 0 && neg == 0 {
        return 0.0;
    }
    (pos - neg) as f64 / ((pos + neg) as f64).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_text_is_exactly_zero() {
        assert_eq!(analyze_sentiment("release the build on friday"), 0.0);
        assert_eq!(analyze_sentiment(""), 0.0);
    }

    #[test]
    fn positive_text_scores_positive() {
        assert_eq!(analyze_sentiment("great work, thanks!"), 1.0);
    }

    #[test]
    fn negative_text_scores_negative() {
        assert_eq!(analyze_sentiment("blocked by a problem"), -1.0);
    }

    #[test]
    fn mixed_text_averages() {
        // one positive ("good"), one negative ("issue") -> 0/2
        assert_eq!(analyze_sentiment("good catch on that issue"), 0.0);
        // two positive, one negative -> 1/3
        let score = analyze_sentiment("great, thanks, minor delay");
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn matching_is_substring_based() {
        // "urgent" matches inside "urgently"
        assert!(analyze_sentiment("handle this urgently") < 0.0);
    }

    #[test]
    fn score_stays_in_range() {
        for text in ["good great thanks appreciate happy", "issue problem delay blocked angry"] {
            let s = analyze_sentiment(text);
            assert!((-1.0..=1.0).contains(&s));
        }
    }
}
