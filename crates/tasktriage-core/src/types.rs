//! Value types for the suggestion engine.
//!
//! All of these are plain immutable records: inputs arrive from the hosting
//! layer (HTTP handler, CLI, tests) as JSON, outputs are serialized back out.
//! Nothing here is persisted by this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of a context snippet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContextSource {
    /// WhatsApp message
    Whatsapp,
    /// Email body or excerpt
    Email,
    /// Free-form note
    Note,
    /// Anything else
    Other,
}

impl Default for ContextSource {
    fn default() -> Self {
        ContextSource::Other
    }
}

impl fmt::Display for ContextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContextSource::Whatsapp => "whatsapp",
            ContextSource::Email => "email",
            ContextSource::Note => "note",
            ContextSource::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// A task to score, as provided by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl TaskInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A free-text record (chat/email/note) used to bias suggestions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContextSnippet {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source_type: ContextSource,
}

impl ContextSnippet {
    pub fn new(content: impl Into<String>, source_type: ContextSource) -> Self {
        Self {
            content: content.into(),
            source_type,
        }
    }

    /// Convenience constructor for snippets where the origin is unknown.
    pub fn note(content: impl Into<String>) -> Self {
        Self::new(content, ContextSource::Note)
    }
}

/// Personalization knobs supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPreferences {
    /// Category name the user gravitates toward; tasks mentioning it get a
    /// small urgency bonus.
    #[serde(default)]
    pub preferred_category: Option<String>,
}

/// Current workload metrics supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkloadInfo {
    /// Number of currently active tasks; scales the deadline load factor.
    #[serde(default)]
    pub num_active_tasks: Option<f64>,
}

/// Request envelope for [`crate::SuggestionEngine::suggest`].
///
/// Field names match the JSON the hosting layer accepts: `tasks`, `context`,
/// `user_preferences`, `current_task_load`. Every field is optional; missing
/// pieces degrade to neutral behavior rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub tasks: Vec<TaskInput>,
    #[serde(default)]
    pub context: Vec<ContextSnippet>,
    #[serde(default)]
    pub user_preferences: Option<UserPreferences>,
    #[serde(default)]
    pub current_task_load: Option<WorkloadInfo>,
}

/// A scored suggestion for one task, or a follow-up derived from context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub title: String,
    /// Urgency plus a complexity contribution, rounded to 3 decimals.
    pub suggested_priority_score: f64,
    /// Whole-day offset from the evaluation clock, 1..=14 days out.
    pub suggested_deadline: DateTime<Utc>,
    /// Drawn from the fixed category table; never invented.
    pub suggested_category_name: Option<String>,
    pub enhanced_description: String,
}

/// Engine output: per-task suggestions plus follow-ups derived from context.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SuggestionResponse {
    /// One entry per input task, order preserved.
    pub suggestions: Vec<Suggestion>,
    /// Follow-up tasks synthesized from context, in snippet scan order.
    pub derived_tasks: Vec<Suggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_with_all_fields_missing() {
        let req: SuggestRequest = serde_json::from_str("{}").unwrap();
        assert!(req.tasks.is_empty());
        assert!(req.context.is_empty());
        assert!(req.user_preferences.is_none());
        assert!(req.current_task_load.is_none());
    }

    #[test]
    fn snippet_source_type_defaults_to_other() {
        let snippet: ContextSnippet =
            serde_json::from_str(r#"{"content": "ping me later"}"#).unwrap();
        assert_eq!(snippet.source_type, ContextSource::Other);
    }

    #[test]
    fn source_type_round_trips_lowercase() {
        let json = serde_json::to_string(&ContextSource::Whatsapp).unwrap();
        assert_eq!(json, r#""whatsapp""#);
        let back: ContextSource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ContextSource::Whatsapp);
    }

    #[test]
    fn request_accepts_http_payload_shape() {
        let raw = r#"{
            "tasks": [{"title": "Fix bug", "description": "crash on save"}],
            "context": [{"content": "email from ops", "source_type": "email"}],
            "user_preferences": {"preferred_category": "devops"},
            "current_task_load": {"num_active_tasks": 3}
        }"#;
        let req: SuggestRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.tasks.len(), 1);
        assert_eq!(req.context[0].source_type, ContextSource::Email);
        assert_eq!(
            req.user_preferences.unwrap().preferred_category.as_deref(),
            Some("devops")
        );
        assert_eq!(req.current_task_load.unwrap().num_active_tasks, Some(3.0));
    }
}
