//! Pure text-analysis scorers.
//!
//! Every function in this module is a total, side-effect-free transform over
//! its arguments plus fixed keyword tables:
//! - Keyword extraction (frequency ranking with stop-word filtering)
//! - Sentiment scoring (positive/negative word sets)
//! - Complexity estimation (dominant-hint weight)
//! - Urgency scoring (additive keyword weights, context at reduced strength)
//!
//! Matching is deliberately substring-based rather than word-boundary-aware;
//! "meeting" also matches inside "meetings". The tables are the source of
//! truth for reproducible behavior and are kept as ordered `const` slices.

pub mod complexity;
pub mod keywords;
pub mod sentiment;
pub mod urgency;

pub use complexity::estimate_complexity;
pub use keywords::extract_keywords;
pub use sentiment::analyze_sentiment;
pub use urgency::keyword_urgency;
