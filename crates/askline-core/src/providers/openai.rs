//! Chat-completion adapter: OpenAI-compatible `/chat/completions`.

use super::{ProviderAdapter, Source};
use crate::config::LineConfig;
use crate::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Completion bound per question.
const MAX_TOKENS: u32 = 256;

// OpenAI-compatible request/response structures
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// The most capable and costliest rung, tried last. Requires a configured
/// key; without one the call fails immediately and the ladder is exhausted.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiAdapter {
    pub fn from_config(config: &LineConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: config.openai_api_url.trim_end_matches('/').to_string(),
            model: config.openai_model.clone(),
            api_key: config.openai_api_key.clone(),
        }
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn source(&self) -> Source {
        Source::OpenAi
    }

    async fn answer(&self, question: &str) -> ProviderResult<String> {
        let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            return Err(ProviderError::MissingCredential("OPENAI_API_KEY"));
        };

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: question.to_string(),
            }],
            max_tokens: Some(MAX_TOKENS),
        };

        tracing::debug!(
            target: "askline::provider",
            model = %self.model,
            "dispatching to chat completions"
        );

        let res = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let parsed: ChatResponse = res.json().await?;
        parsed
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| ProviderError::Malformed("no choices in response".to_string()))
    }
}
