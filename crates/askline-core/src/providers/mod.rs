//! Provider adapters: one outbound HTTP call per external inference endpoint.
//!
//! Each adapter normalizes its provider's wire format to plain answer text.
//! `Ok` may carry an empty string (the provider answered with nothing);
//! transport failures, non-success statuses, missing credentials, and
//! malformed bodies are `Err`. Nothing here retries, and no adapter state is
//! shared across invocations beyond the reqwest client's connection pool.

mod huggingface;
mod ollama;
mod openai;

pub use huggingface::HuggingFaceAdapter;
pub use ollama::OllamaAdapter;
pub use openai::OpenAiAdapter;

use crate::error::ProviderResult;
use serde::{Deserialize, Serialize};

/// Which adapter produced an answer. Always exactly one per reply, never a blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Local,
    HuggingFace,
    OpenAi,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Source::Local => "local",
            Source::HuggingFace => "huggingface",
            Source::OpenAi => "openai",
        };
        f.write_str(s)
    }
}

/// A provider adapter calls exactly one external inference endpoint.
#[async_trait::async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// The source tag attached to answers this adapter produces.
    fn source(&self) -> Source;

    /// One attempt, one outbound call. Callers own the timeout policy via
    /// the client each adapter is constructed with.
    async fn answer(&self, question: &str) -> ProviderResult<String>;
}
