//! Axum HTTP gateway exposing transform, AI check, punctuation and stats as
//! JSON endpoints, with body limits and request timeouts.

mod handlers;

use handlers::{handle_ai_check, handle_health, handle_punctuate, handle_stats, handle_transform};

use crate::analyze::AiLikelihoodAnalyzer;
use crate::config::Config;
use crate::style::WritingStyle;
use crate::text::PunctuationMode;
use crate::transform::{AttemptPlan, StyleTransformer};
use anyhow::{Context, Result};
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Floor for the per-request timeout.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 300;
/// Headroom over the worst-case upstream time for prompt building and I/O.
const REQUEST_TIMEOUT_SLACK_SECS: u64 = 30;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub transformer: Arc<StyleTransformer>,
    pub analyzer: Arc<AiLikelihoodAnalyzer>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn from_config(config: Arc<Config>) -> Result<Self> {
        Ok(Self {
            request_timeout: request_timeout(&config),
            transformer: Arc::new(StyleTransformer::new(Arc::clone(&config))?),
            analyzer: Arc::new(AiLikelihoodAnalyzer::new(config)?),
        })
    }
}

/// Long enough for every transform attempt to walk the full candidate
/// matrix, so upstream failures surface as their own status rather than 408.
pub fn request_timeout(config: &Config) -> Duration {
    let attempts = u64::try_from(AttemptPlan::MAX_ATTEMPTS).unwrap_or(u64::MAX);
    let worst = config
        .provider
        .worst_case_call_secs()
        .saturating_mul(attempts)
        .saturating_add(REQUEST_TIMEOUT_SLACK_SECS);
    Duration::from_secs(worst.max(MIN_REQUEST_TIMEOUT_SECS))
}

/// `POST /api/transform` body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformBody {
    pub text: String,
    #[serde(default)]
    pub writing_style: WritingStyle,
    #[serde(default)]
    pub punctuation_mode: PunctuationMode,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub high_accuracy: bool,
}

/// `POST /api/ai-check` and `POST /api/stats` body
#[derive(Debug, Deserialize)]
pub struct TextBody {
    pub text: String,
}

/// `POST /api/punctuate` body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunctuateBody {
    pub text: String,
    #[serde(default)]
    pub punctuation_mode: PunctuationMode,
}

pub fn build_router(state: AppState) -> Router {
    let timeout = state.request_timeout;
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/transform", post(handle_transform))
        .route("/api/ai-check", post(handle_ai_check))
        .route("/api/punctuate", post(handle_punctuate))
        .route("/api/stats", post(handle_stats))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
}

/// Bind `host:port` and serve until the process is stopped.
pub async fn run_gateway(host: &str, port: u16, config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid gateway address {host}:{port}"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    run_gateway_with_listener(listener, config).await
}

/// Serve from a pre-bound listener.
pub async fn run_gateway_with_listener(
    listener: tokio::net::TcpListener,
    config: Config,
) -> Result<()> {
    let addr = listener.local_addr()?;
    if !config.has_api_key() {
        tracing::warn!("No Gemini API key configured; /api/transform and /api/ai-check will fail");
    }

    let state = AppState::from_config(Arc::new(config))?;
    let app = build_router(state);

    tracing::info!(%addr, "Gateway listening");
    println!("◆ buntai gateway listening on http://{addr}");
    println!("  POST /api/transform");
    println!("  POST /api/ai-check");
    println!("  POST /api/punctuate");
    println!("  POST /api/stats");
    println!("  GET  /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Gateway shutting down");
}
