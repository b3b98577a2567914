//! Local inference adapter: Ollama `/api/generate`.

use super::{ProviderAdapter, Source};
use crate::config::LineConfig;
use crate::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Generation bound sent as `options.num_predict`.
const NUM_PREDICT: u32 = 128;

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Calls a local Ollama server and hard-truncates the reply to a fixed
/// character budget. The client timeout is minutes-scale: local inference
/// can be slow under load, and one request is allowed to block for the full
/// bound before the orchestrator falls through.
pub struct OllamaAdapter {
    client: reqwest::Client,
    base_url: String,
    model: String,
    reply_char_budget: usize,
}

impl OllamaAdapter {
    pub fn from_config(config: &LineConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.ollama_timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: config.ollama_url.trim_end_matches('/').to_string(),
            model: config.ollama_model.clone(),
            reply_char_budget: config.reply_char_budget,
        }
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for OllamaAdapter {
    fn source(&self) -> Source {
        Source::Local
    }

    async fn answer(&self, question: &str) -> ProviderResult<String> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: self.model.clone(),
            prompt: question.to_string(),
            stream: false,
            options: GenerateOptions {
                num_predict: NUM_PREDICT,
            },
        };

        tracing::debug!(
            target: "askline::provider",
            model = %self.model,
            "dispatching to local ollama"
        );

        let res = self.client.post(&url).json(&body).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let parsed: GenerateResponse = res.json().await?;
        Ok(truncate_chars(parsed.response.trim(), self.reply_char_budget))
    }
}

/// At most `budget` characters, cut on a char boundary.
fn truncate_chars(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn short_replies_pass_through() {
        assert_eq!(truncate_chars("short answer", 300), "short answer");
        assert_eq!(truncate_chars("", 300), "");
    }

    #[test]
    fn long_replies_are_cut_to_budget() {
        let long = "a".repeat(500);
        assert_eq!(truncate_chars(&long, 300).chars().count(), 300);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "héllo wörld".repeat(50);
        let cut = truncate_chars(&text, 300);
        assert_eq!(cut.chars().count(), 300);
        assert!(text.starts_with(&cut));
    }
}
