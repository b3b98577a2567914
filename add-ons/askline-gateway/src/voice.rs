//! Voice webhook: stateless greeting/responding turns over voice markup.
//!
//! The telephony provider calls back with form fields on POST, or query
//! parameters when configured for GET. No conversation state is kept here:
//! each request reconstructs its turn from the presence of the
//! recognized-speech field. Absent or blank speech yields the greeting;
//! recognized speech is fed through the same fallback ladder as `/ask`,
//! spoken back, and a fresh gather window keeps the call looping until the
//! caller hangs up or stays silent past the timeout.

use crate::AppState;
use askline_core::twiml::{say_and_gather, APOLOGY, GREETING};
use askline_core::Answer;
use axum::extract::{Form, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

/// Fields of interest from the telephony callback. The provider sends many
/// more; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct VoiceParams {
    #[serde(rename = "SpeechResult")]
    pub speech_result: Option<String>,
    #[serde(rename = "CallSid")]
    pub call_sid: Option<String>,
}

pub async fn voice_query(
    State(state): State<AppState>,
    Query(params): Query<VoiceParams>,
) -> Response {
    voice_turn(state, params).await
}

pub async fn voice_form(
    State(state): State<AppState>,
    Form(params): Form<VoiceParams>,
) -> Response {
    voice_turn(state, params).await
}

async fn voice_turn(state: AppState, params: VoiceParams) -> Response {
    let call = params.call_sid.as_deref().unwrap_or("-");
    let speech = params
        .speech_result
        .as_deref()
        .map(str::trim)
        .unwrap_or("");

    let spoken = if speech.is_empty() {
        // Greeting turn: fresh call, or the caller's silence exhausted the
        // previous gather window.
        tracing::info!(target: "askline::voice", call = %call, "greeting turn");
        GREETING.to_string()
    } else {
        tracing::info!(
            target: "askline::voice",
            call = %call,
            chars = speech.len(),
            "responding turn"
        );
        match state.orchestrator.ask(speech).await {
            Answer::Replied { answer, .. } => answer,
            Answer::Failed { .. } => APOLOGY.to_string(),
        }
    };

    xml_response(say_and_gather(&spoken, state.config.gather_timeout_secs))
}

fn xml_response(xml: String) -> Response {
    ([(header::CONTENT_TYPE, "text/xml")], xml).into_response()
}
