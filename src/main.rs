mod agent;
mod config_manager;
mod handlers;
mod routes;
mod state;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config_manager::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hobby_agent=debug,tower_http=debug")),
        )
        .init();

    // Load configuration - first existing candidate wins, defaults otherwise
    let (config, loaded_path) = Config::discover(&Config::candidate_paths())?;
    match loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }
    let config = config.finalize();

    if config.llm_config.llm_api_key.is_empty() {
        warn!("No API key configured; completion calls will fail until OPENAI_API_KEY is set");
    }

    let addr = config.system_config.resolve_addr().await?;

    // Initialize app state
    let app_state = AppState::new(config)?;

    // Build application
    let app = routes::build_app(app_state);

    // Start server
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
