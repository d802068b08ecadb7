mod analysis;
mod config;
mod directory;
mod errors;
mod formation;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::{DisabledAnalyzer, DocumentAnalyzer, LlmDocumentAnalyzer};
use crate::config::Config;
use crate::directory::{Directory, InMemoryDirectory};
use crate::formation::assembler::TeamAssembler;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Teamsmith API v{}", env!("CARGO_PKG_VERSION"));

    let directory: Arc<dyn Directory> = match &config.roster_seed_path {
        Some(path) => Arc::new(
            InMemoryDirectory::load(path)
                .with_context(|| format!("Failed to load roster seed {}", path.display()))?,
        ),
        None => {
            info!("ROSTER_SEED_PATH not set, using the built-in sample directory");
            Arc::new(InMemoryDirectory::sample()?)
        }
    };

    let analyzer: Arc<dyn DocumentAnalyzer> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmDocumentAnalyzer::new(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set, document analysis disabled");
            Arc::new(DisabledAnalyzer)
        }
    };

    let assembler = TeamAssembler::new(config.team_score_policy);
    info!("Team score policy: {:?}", assembler.policy());

    let state = AppState {
        directory,
        analyzer,
        assembler,
    };

    // The dashboard is served from a different origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
