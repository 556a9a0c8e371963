//! LM Studio chat-completion client.
//!
//! Talks to an OpenAI-compatible `/chat/completions` endpoint (LM Studio's
//! local server by default). One bounded attempt per call, no retry; every
//! failure maps to `None` per the [`Enhancer`] contract.

use std::time::Duration;

use serde_json::json;

use super::Enhancer;
use crate::config::AiConfig;

const SYSTEM_PROMPT: &str = "You assist with task triage and context-aware suggestions.";
const TEMPERATURE: f64 = 0.2;
const MAX_TOKENS: u32 = 256;

/// Chat-completion enhancer for a local LM Studio endpoint.
pub struct LmStudioEnhancer {
    base_url: String,
    model: String,
    timeout: Duration,
}

impl LmStudioEnhancer {
    /// Build the client from configuration.
    pub fn new(config: &AiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    async fn request(&self, prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let resp = client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let data: serde_json::Value = resp.json().await?;
        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or("missing message content in completion response")?;
        Ok(content.trim().to_string())
    }
}

impl Enhancer for LmStudioEnhancer {
    fn enhance(&self, prompt: &str) -> Option<String> {
        let rt = tokio::runtime::Runtime::new().ok()?;
        rt.block_on(self.request(prompt)).ok()
    }
}
