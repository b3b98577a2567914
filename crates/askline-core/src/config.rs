//! Line configuration loaded from TOML and environment.
//!
//! One explicit struct passed into constructors at startup, so adapters and
//! the gateway can be built against fake endpoints and keys in tests.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global application configuration (gateway + providers). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    /// Application identity reported by `/v1/status`.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,

    /// Base URL of the local Ollama server.
    pub ollama_url: String,
    /// Model tag passed to `/api/generate`.
    pub ollama_model: String,
    /// Minutes-scale bound: local inference can be slow under load.
    pub ollama_timeout_secs: u64,
    /// Hard cap on the local reply length, in characters. Keeps voice and
    /// chat turns short.
    pub reply_char_budget: usize,

    /// Hugging Face Inference API base URL.
    pub hf_api_url: String,
    /// Hosted model queried at `{hf_api_url}/models/{hf_model}`.
    pub hf_model: String,
    /// Generation bound sent as `parameters.max_new_tokens`.
    pub hf_max_new_tokens: u32,
    /// HF_API_TOKEN. Absent => the hosted-inference rung fails immediately.
    #[serde(default)]
    pub hf_api_token: Option<String>,

    /// OpenAI-compatible API base URL.
    pub openai_api_url: String,
    /// Model sent to `/chat/completions`.
    pub openai_model: String,
    /// OPENAI_API_KEY. Absent => the chat-completion rung fails immediately.
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// Default timeout for the hosted providers, in seconds.
    pub request_timeout_secs: u64,
    /// Seconds the voice webhook waits for the caller's next utterance.
    pub gather_timeout_secs: u8,
}

impl LineConfig {
    /// Load config from file and environment. Precedence: env `ASKLINE_CONFIG`
    /// path > `config/gateway.toml` > defaults. Credentials keep their
    /// conventional names (`HF_API_TOKEN`, `OPENAI_API_KEY`) and are layered
    /// in last; an explicit `ASKLINE__`-prefixed value still wins.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("ASKLINE_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "askline")?
            .set_default("port", 8080_i64)?
            .set_default("ollama_url", "http://127.0.0.1:11434")?
            .set_default("ollama_model", "llama3")?
            .set_default("ollama_timeout_secs", 180_i64)?
            .set_default("reply_char_budget", 300_i64)?
            .set_default("hf_api_url", "https://api-inference.huggingface.co")?
            .set_default("hf_model", "mistralai/Mistral-7B-Instruct-v0.2")?
            .set_default("hf_max_new_tokens", 120_i64)?
            .set_default("openai_api_url", "https://api.openai.com/v1")?
            .set_default("openai_model", "gpt-4o-mini")?
            .set_default("request_timeout_secs", 30_i64)?
            .set_default("gather_timeout_secs", 6_i64)?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let mut loaded: Self = builder
            .add_source(config::Environment::with_prefix("ASKLINE").separator("__"))
            .build()?
            .try_deserialize()?;

        if loaded.hf_api_token.is_none() {
            loaded.hf_api_token = env_opt_string("HF_API_TOKEN");
        }
        if loaded.openai_api_key.is_none() {
            loaded.openai_api_key = env_opt_string("OPENAI_API_KEY");
        }
        Ok(loaded)
    }

    /// True when the hosted-inference rung has a token to send.
    pub fn hf_configured(&self) -> bool {
        self.hf_api_token
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
    }

    /// True when the chat-completion rung has a key to send.
    pub fn openai_configured(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
    }
}

fn env_opt_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
