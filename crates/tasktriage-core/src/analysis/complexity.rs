//! Task complexity estimation.
//!
//! Unlike the urgency scorer this is dominant-hint, not additive: the score
//! is the maximum weight among matching hints, so "migrate and refactor"
//! scores 1.0, not 1.7.

/// Effort hints and their weights.
const COMPLEXITY_HINTS: &[(&str, f64)] = &[
    ("research", 0.8),
    ("integrate", 0.9),
    ("migrate", 1.0),
    ("refactor", 0.7),
    ("write", 0.4),
    ("email", 0.2),
    ("meeting", 0.3),
    ("setup", 0.6),
    ("debug", 0.7),
];

const BASE_SCORE: f64 = 0.3;

/// Estimate task complexity from its description, in `[0.1, 1.2]`.
///
/// Starts at a base of 0.3 and raises the score to the weight of any matching
/// hint that exceeds it (substring match against the lowercased description).
pub fn estimate_complexity(description: &str) -> f64 {
    let description = description.to_lowercase();
    let mut score = BASE_SCORE;
    for &(hint, weight) in COMPLEXITY_HINTS {
        if weight > score && description.contains(hint) {
            score = weight;
        }
    }
    score.clamp(0.1, 1.2)
}
