//! Hosted inference adapter: Hugging Face Inference API.

use super::{ProviderAdapter, Source};
use crate::config::LineConfig;
use crate::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
}

#[derive(Deserialize)]
struct InferenceReply {
    #[serde(default)]
    generated_text: String,
}

/// Calls the hosted Inference API at `{base}/models/{model}` with a Bearer
/// token. Without a token the call fails immediately and the ladder falls
/// through to the next rung.
pub struct HuggingFaceAdapter {
    client: reqwest::Client,
    base_url: String,
    model: String,
    token: Option<String>,
    max_new_tokens: u32,
}

impl HuggingFaceAdapter {
    pub fn from_config(config: &LineConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: config.hf_api_url.trim_end_matches('/').to_string(),
            model: config.hf_model.clone(),
            token: config.hf_api_token.clone(),
            max_new_tokens: config.hf_max_new_tokens,
        }
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for HuggingFaceAdapter {
    fn source(&self) -> Source {
        Source::HuggingFace
    }

    async fn answer(&self, question: &str) -> ProviderResult<String> {
        let Some(token) = self.token.as_deref().filter(|t| !t.trim().is_empty()) else {
            return Err(ProviderError::MissingCredential("HF_API_TOKEN"));
        };

        let url = format!("{}/models/{}", self.base_url, self.model);
        let body = InferenceRequest {
            inputs: question.to_string(),
            parameters: InferenceParameters {
                max_new_tokens: self.max_new_tokens,
            },
        };

        tracing::debug!(
            target: "askline::provider",
            model = %self.model,
            "dispatching to hosted inference"
        );

        let res = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let replies: Vec<InferenceReply> = res.json().await?;
        let text = replies
            .into_iter()
            .next()
            .map(|r| r.generated_text)
            .ok_or_else(|| ProviderError::Malformed("empty generations array".to_string()))?;

        Ok(strip_echoed_prompt(&text, question).to_string())
    }
}

/// Text-generation models echo the prompt ahead of the completion.
fn strip_echoed_prompt<'a>(text: &'a str, question: &str) -> &'a str {
    text.strip_prefix(question).unwrap_or(text).trim_start()
}
