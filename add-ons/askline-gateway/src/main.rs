//! askline gateway: axum entry point for the question endpoint, the voice
//! webhook, and the embedded chat client. Config-driven via LineConfig.
//!
//! Every inbound request is handled independently; the only shared state is
//! the read-only configuration and the orchestrator's adapter ladder.

mod voice;

use askline_core::{Answer, FallbackOrchestrator, LineConfig};
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
struct AppState {
    pub(crate) config: Arc<LineConfig>,
    pub(crate) orchestrator: Arc<FallbackOrchestrator>,
}

#[derive(Deserialize)]
struct AskRequest {
    text: String,
}

#[tokio::main]
async fn main() {
    // .env first so EnvFilter and credentials see it.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match LineConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config load failed: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        target: "askline::gateway",
        app = %config.app_name,
        port = config.port,
        hf = config.hf_configured(),
        openai = config.openai_configured(),
        "starting gateway"
    );

    let addr = format!("0.0.0.0:{}", config.port);
    let orchestrator = Arc::new(FallbackOrchestrator::from_config(&config));
    let state = AppState {
        config: Arc::new(config),
        orchestrator,
    };

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

fn build_app(state: AppState) -> Router {
    // Public endpoints: any origin may call the question endpoint.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/v1/status", get(status))
        .route("/chat", get(serve_chat_ui))
        .route("/ask", post(ask))
        .route("/voice", get(voice::voice_query).post(voice::voice_form))
        .with_state(state)
        .layer(cors)
}

async fn health() -> &'static str {
    "OK"
}

/// Which rungs of the fallback ladder are live, without sending a question.
async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    let config = &state.config;
    Json(serde_json::json!({
        "app_name": config.app_name,
        "port": config.port,
        "providers": {
            "local": { "configured": true, "url": config.ollama_url, "model": config.ollama_model },
            "huggingface": { "configured": config.hf_configured(), "model": config.hf_model },
            "openai": { "configured": config.openai_configured(), "model": config.openai_model },
        }
    }))
}

/// Chat client: self-contained page, conversation history stays in the browser.
async fn serve_chat_ui() -> Html<&'static str> {
    const CHAT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));
    Html(CHAT)
}

/// POST /ask: validate, run the fallback ladder, return the serialized
/// Answer. Total provider failure is a domain-level error under HTTP 200;
/// only validation failures are transport-level.
async fn ask(
    State(state): State<AppState>,
    Json(body): Json<AskRequest>,
) -> Result<Json<Answer>, (StatusCode, Json<serde_json::Value>)> {
    let question = body.text.trim().to_string();
    if question.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": "text must be a non-empty string" })),
        ));
    }
    Ok(Json(state.orchestrator.ask(&question).await))
}
