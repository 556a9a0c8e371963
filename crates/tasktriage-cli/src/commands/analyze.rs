//! Heuristic inspection commands.
//!
//! Each subcommand exposes one scorer so its behavior can be checked from
//! the shell without building a full request.

use clap::Subcommand;
use serde_json::json;

use tasktriage_core::{
    analyze_sentiment, estimate_complexity, extract_keywords, infer_category, keyword_urgency,
};

#[derive(Subcommand)]
pub enum AnalyzeAction {
    /// Extract top keywords from text
    Keywords {
        /// Text to analyze
        text: String,
        /// Maximum keywords to return
        #[arg(long, default_value = "8")]
        top_k: usize,
    },
    /// Score sentiment in [-1, 1]
    Sentiment {
        /// Text to analyze
        text: String,
    },
    /// Estimate complexity in [0.1, 1.2]
    Complexity {
        /// Task description
        text: String,
    },
    /// Score urgency in [0, 2]
    Urgency {
        /// Task title
        #[arg(long)]
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        description: String,
        /// Context snippet (repeatable)
        #[arg(long = "context")]
        context: Vec<String>,
    },
    /// Infer a category from text
    Category {
        /// Text to analyze
        text: String,
    },
}

pub fn run(action: AnalyzeAction) -> Result<(), Box<dyn std::error::Error>> {
    let output = match action {
        AnalyzeAction::Keywords { text, top_k } => {
            let keywords: Vec<_> = extract_keywords(&text, top_k)
                .into_iter()
                .map(|(word, count)| json!({ "word": word, "count": count }))
                .collect();
            json!({ "keywords": keywords })
        }
        AnalyzeAction::Sentiment { text } => json!({ "sentiment": analyze_sentiment(&text) }),
        AnalyzeAction::Complexity { text } => {
            json!({ "complexity": estimate_complexity(&text) })
        }
        AnalyzeAction::Urgency {
            title,
            description,
            context,
        } => json!({ "urgency": keyword_urgency(&title, &description, &context) }),
        AnalyzeAction::Category { text } => json!({ "category": infer_category(&text) }),
    };
    println!("{output}");
    Ok(())
}
