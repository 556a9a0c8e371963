//! # Tasktriage Core Library
//!
//! This library provides the core business logic for Tasktriage, a heuristic
//! suggestion engine for task triage. It follows a CLI-first philosophy where
//! all operations are available via a standalone CLI binary, with any hosting
//! server or GUI being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Analysis**: Pure keyword/sentiment/complexity/urgency scorers over
//!   free text, driven by fixed lookup tables
//! - **Suggest**: Deadline, category and description derivation composed into
//!   the [`SuggestionEngine`] orchestrator
//! - **Enhancer**: Optional language-model enhancement behind the
//!   [`Enhancer`] capability trait (no-op by default)
//! - **Config**: TOML-based configuration selecting the enhancement provider
//!
//! The engine is stateless: every call is a pure transform over its arguments
//! plus the static tables, with the evaluation clock passed in explicitly.
//!
//! ## Key Components
//!
//! - [`SuggestionEngine`]: Per-task scoring and derived follow-up extraction
//! - [`Enhancer`]: Trait for external language-model providers
//! - [`Config`]: Application configuration management

pub mod analysis;
pub mod config;
pub mod enhancer;
pub mod error;
pub mod suggest;
pub mod types;

pub use analysis::{analyze_sentiment, estimate_complexity, extract_keywords, keyword_urgency};
pub use config::{AiConfig, AiProvider, Config};
pub use enhancer::{Enhancer, LmStudioEnhancer, NoopEnhancer};
pub use error::{ConfigError, CoreError};
pub use suggest::{infer_category, suggest, suggest_deadline, SuggestionEngine};
pub use types::{
    ContextSnippet, ContextSource, SuggestRequest, Suggestion, SuggestionResponse, TaskInput,
    UserPreferences, WorkloadInfo,
};
