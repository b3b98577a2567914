//! Fallback orchestrator: adapters in fixed priority order, first non-empty
//! answer wins.
//!
//! The order {local, huggingface, openai} encodes cost and latency, not
//! quality: free local inference first, free hosted inference second, the
//! paid chat-completion endpoint last. Calls are strictly sequential; a
//! hung provider blocks its request up to that adapter's own timeout before
//! the ladder moves on. No retries, no speculative calls, no cancellation.

use crate::config::LineConfig;
use crate::providers::{
    HuggingFaceAdapter, OllamaAdapter, OpenAiAdapter, ProviderAdapter, Source,
};
use serde::Serialize;

/// Fixed failure message returned when every rung comes back empty.
pub const ALL_PROVIDERS_FAILED: &str = "All providers failed";

/// The single result produced per question: the first successful answer
/// tagged with its source, or the total-failure payload. Serializes as
/// `{"answer", "source"}` or `{"error"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Replied { answer: String, source: Source },
    Failed { error: String },
}

pub struct FallbackOrchestrator {
    adapters: Vec<Box<dyn ProviderAdapter>>,
}

impl FallbackOrchestrator {
    /// Adapters are tried in the order given.
    pub fn new(adapters: Vec<Box<dyn ProviderAdapter>>) -> Self {
        Self { adapters }
    }

    /// The standard ladder: local, hosted inference, chat completions.
    pub fn from_config(config: &LineConfig) -> Self {
        Self::new(vec![
            Box::new(OllamaAdapter::from_config(config)),
            Box::new(HuggingFaceAdapter::from_config(config)),
            Box::new(OpenAiAdapter::from_config(config)),
        ])
    }

    /// One attempt per adapter. A reply that trims to empty counts as a
    /// failure; call failures are logged and never surfaced with detail.
    pub async fn ask(&self, question: &str) -> Answer {
        for adapter in &self.adapters {
            let source = adapter.source();
            match adapter.answer(question).await {
                Ok(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        tracing::info!(
                            target: "askline::orchestrator",
                            source = %source,
                            chars = trimmed.len(),
                            "provider answered"
                        );
                        return Answer::Replied {
                            answer: trimmed.to_string(),
                            source,
                        };
                    }
                    tracing::debug!(
                        target: "askline::orchestrator",
                        source = %source,
                        "empty reply, falling through"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        target: "askline::orchestrator",
                        source = %source,
                        "provider call failed: {}",
                        e
                    );
                }
            }
        }
        Answer::Failed {
            error: ALL_PROVIDERS_FAILED.to_string(),
        }
    }
}
