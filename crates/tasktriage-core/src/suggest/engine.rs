//! Suggestion orchestrator.
//!
//! Composes the analysis scorers into per-task suggestions and derives
//! follow-up tasks from context snippets. Stateless between calls; the
//! evaluation clock is an explicit argument so identical inputs with a fixed
//! clock produce identical output.

use chrono::{DateTime, Duration, Utc};

use crate::analysis::{analyze_sentiment, estimate_complexity, keyword_urgency};
use crate::config::{AiProvider, Config};
use crate::enhancer::{Enhancer, LmStudioEnhancer, NoopEnhancer};
use crate::suggest::category::infer_category;
use crate::suggest::deadline::suggest_deadline;
use crate::suggest::enhance::{enhance_description, truncate_chars};
use crate::types::{SuggestRequest, Suggestion, SuggestionResponse, TaskInput};

/// Phrases marking a context snippet as an actionable follow-up.
const FOLLOW_UP_MARKERS: &[&str] = &["follow up", "follow-up", "action items"];

/// Negative overall context sentiment raises urgency by up to this much.
const SENTIMENT_WEIGHT: f64 = 0.2;

/// Urgency bonus when a task mentions the user's preferred category.
const PREFERENCE_BONUS: f64 = 0.1;

const DERIVED_TITLE: &str = "Follow up on recent thread";
const DERIVED_PRIORITY: f64 = 0.8;
const DERIVED_DEADLINE_DAYS: i64 = 2;
const DERIVED_FALLBACK_CATEGORY: &str = "General";
const DERIVED_DESCRIPTION_LIMIT: usize = 200;

/// Max context characters forwarded to the language-model prompt.
const PROMPT_CONTEXT_LIMIT: usize = 2000;

/// The suggestion engine.
///
/// Holds the configured [`Enhancer`]; everything else is static tables.
pub struct SuggestionEngine {
    enhancer: Box<dyn Enhancer>,
}

impl SuggestionEngine {
    /// Create a heuristic-only engine (no-op enhancer).
    pub fn new() -> Self {
        Self {
            enhancer: Box::new(NoopEnhancer),
        }
    }

    /// Create an engine with a specific enhancement provider.
    pub fn with_enhancer(enhancer: Box<dyn Enhancer>) -> Self {
        Self { enhancer }
    }

    /// Build the engine from configuration, wiring the language-model
    /// enhancer only when its provider is selected.
    pub fn from_config(config: &Config) -> Self {
        match config.ai.provider {
            AiProvider::LmStudio => {
                Self::with_enhancer(Box::new(LmStudioEnhancer::new(&config.ai)))
            }
            AiProvider::Off => Self::new(),
        }
    }

    /// Score every task in `request` and derive follow-ups from context.
    ///
    /// Suggestions come back in input-task order; derived tasks in snippet
    /// scan order. Empty inputs yield empty outputs.
    pub fn suggest(&self, request: &SuggestRequest, now: DateTime<Utc>) -> SuggestionResponse {
        let context_texts: Vec<String> = request
            .context
            .iter()
            .map(|snippet| snippet.content.clone())
            .collect();
        let joined_context = context_texts.join("\n");
        let context_sentiment = analyze_sentiment(&joined_context);

        let suggestions = request
            .tasks
            .iter()
            .map(|task| {
                self.suggest_for_task(
                    task,
                    request,
                    &context_texts,
                    &joined_context,
                    context_sentiment,
                    now,
                )
            })
            .collect();

        SuggestionResponse {
            suggestions,
            derived_tasks: derive_follow_ups(&context_texts, now),
        }
    }

    fn suggest_for_task(
        &self,
        task: &TaskInput,
        request: &SuggestRequest,
        context_texts: &[String],
        joined_context: &str,
        context_sentiment: f64,
        now: DateTime<Utc>,
    ) -> Suggestion {
        let mut urgency = keyword_urgency(&task.title, &task.description, context_texts);
        // Negative context sentiment raises urgency; positive has no effect.
        urgency += (-context_sentiment).max(0.0) * SENTIMENT_WEIGHT;
        urgency = urgency.clamp(0.0, 2.0);

        if let Some(preferred) = request
            .user_preferences
            .as_ref()
            .and_then(|prefs| prefs.preferred_category.as_deref())
        {
            let haystack = format!("{} {}", task.title, task.description).to_lowercase();
            if !preferred.is_empty() && haystack.contains(&preferred.to_lowercase()) {
                urgency += PREFERENCE_BONUS;
            }
        }

        let complexity = estimate_complexity(&task.description);
        let deadline = suggest_deadline(urgency, complexity, request.current_task_load.as_ref(), now);

        let combined = format!("{} {} {}", task.title, task.description, joined_context);
        let category = infer_category(&combined);

        let mut enhanced = enhance_description(&task.title, &task.description, context_texts);
        if let Some(ai_text) = self.model_enhancement(task, joined_context) {
            enhanced = format!("{enhanced}\n\nAI: {ai_text}");
        }

        Suggestion {
            title: task.title.clone(),
            suggested_priority_score: round3(urgency + complexity * 0.2),
            suggested_deadline: deadline,
            suggested_category_name: category.map(str::to_string),
            enhanced_description: enhanced,
        }
    }

    fn model_enhancement(&self, task: &TaskInput, joined_context: &str) -> Option<String> {
        let prompt = format!(
            "Task: {}\nDescription: {}\nContext: {}\nProvide: refined description in 2-3 bullet points.",
            task.title,
            task.description,
            truncate_chars(joined_context, PROMPT_CONTEXT_LIMIT)
        );
        self.enhancer.enhance(&prompt)
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function running the heuristic-only engine.
pub fn suggest(request: &SuggestRequest, now: DateTime<Utc>) -> SuggestionResponse {
    SuggestionEngine::new().suggest(request, now)
}

/// Scan snippets for follow-up phrasing and synthesize a task per match.
fn derive_follow_ups(context_texts: &[String], now: DateTime<Utc>) -> Vec<Suggestion> {
    context_texts
        .iter()
        .filter_map(|ctx| {
            let lowered = ctx.to_lowercase();
            if !FOLLOW_UP_MARKERS.iter().any(|m| lowered.contains(m)) {
                return None;
            }
            Some(Suggestion {
                title: DERIVED_TITLE.to_string(),
                suggested_priority_score: DERIVED_PRIORITY,
                suggested_deadline: now + Duration::days(DERIVED_DEADLINE_DAYS),
                suggested_category_name: Some(
                    infer_category(ctx)
                        .unwrap_or(DERIVED_FALLBACK_CATEGORY)
                        .to_string(),
                ),
                enhanced_description: truncate_chars(ctx, DERIVED_DESCRIPTION_LIMIT).to_string(),
            })
        })
        .collect()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
