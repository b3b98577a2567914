//! Error types for provider calls.

use thiserror::Error;

/// Result type alias for provider adapter calls.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failure modes of a single outbound provider call.
///
/// `Ok("")` from an adapter means the provider answered with nothing; these
/// variants mean the call itself failed. The orchestrator treats both as
/// "no answer" and falls through to the next rung.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed response: {0}")]
    Malformed(String),
}
