//! Suggestion derivation.
//!
//! Builds on the [`crate::analysis`] scorers to produce the caller-facing
//! outputs: a deadline, a category, an enhanced description, and the
//! [`SuggestionEngine`] orchestrator that composes them per task and derives
//! follow-up tasks from context.

pub mod category;
pub mod deadline;
pub mod engine;
pub mod enhance;

pub use category::infer_category;
pub use deadline::{deadline_offset_days, suggest_deadline};
pub use engine::{suggest, SuggestionEngine};
pub use enhance::enhance_description;
