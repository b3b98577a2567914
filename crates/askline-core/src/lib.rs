//! askline core: configuration, provider adapters, the fallback
//! orchestrator, and the voice-markup renderer shared by the gateway.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod providers;
pub mod twiml;

pub use config::LineConfig;
pub use error::{ProviderError, ProviderResult};
pub use orchestrator::{Answer, FallbackOrchestrator, ALL_PROVIDERS_FAILED};
pub use providers::{
    HuggingFaceAdapter, OllamaAdapter, OpenAiAdapter, ProviderAdapter, Source,
};
