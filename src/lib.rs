//! zk-analysis - goal-conflict detection for German policy text.
//!
//! A thin HTTP service: policy text in, a model-backed structured analysis
//! of goal conflicts (Zielkonflikte) between societal functions out. The
//! detection itself is delegated entirely to an LLM; this crate validates
//! the input, composes the prompt, parses and validates the reply, and
//! serves the result.
//!
//! ## Pipeline
//!
//! ```text
//! Client → length gate → prompt → LLM provider → fence strip + JSON parse
//!        → per-entry validation (drop-and-log) → sort by centrality → JSON
//! ```

#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod logging;
pub mod provider;
pub mod routes;

pub use analysis::{analyze_multi, AnalysisError, ANALYSIS_MAX_TOKENS, ANALYSIS_MODEL};
pub use config::Config;
pub use provider::{
    AnthropicProvider, ChatRequest, ChatResponse, Message, Provider, ProviderError, TokenUsage,
};
pub use routes::{api_routes, AppState};

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Build the service router with fully open CORS.
///
/// The provider is injected so tests can drive the router with a stub.
pub fn build_router(provider: Arc<dyn Provider>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::api_routes(AppState { provider }).layer(cors)
}

/// Start the HTTP server.
pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    if config.anthropic_api_key.is_none() {
        tracing::warn!("ANTHROPIC_API_KEY is not set; analysis requests will fail");
    }

    let provider: Arc<dyn Provider> = Arc::new(AnthropicProvider::new(
        config.anthropic_api_key.clone().unwrap_or_default(),
    ));

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    let router = build_router(provider);

    tracing::info!("Starting zk-analysis on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
