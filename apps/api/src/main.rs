mod config;
mod errors;
mod llm_client;
mod planning;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::planning::planner::{LlmRoadmapPlanner, RoadmapPlanner};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Planner API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client and planner
    let planner: Option<Arc<dyn RoadmapPlanner>> = match &config.openrouter_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), &config.openrouter_base_url)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmRoadmapPlanner::new(llm)))
        }
        None => {
            warn!("OPENROUTER_API_KEY is not set; plan requests will fail until it is");
            None
        }
    };

    let state = AppState { planner };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins to the deployed planner frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
