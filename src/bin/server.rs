use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use expert_chatbots::core::{Config, CredentialPool};
use expert_chatbots::features::completion::{OpenAiClientFactory, PROVIDER};
use expert_chatbots::features::debate::DebateOrchestrator;
use expert_chatbots::features::failover::CredentialHealth;
use expert_chatbots::http::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Expert Chatbots backend...");

    let pool = CredentialPool::from_keys(PROVIDER, &config.api_keys)?;
    info!(
        "🔑 Loaded {} credential(s), model {}",
        pool.len(),
        config.openai_model
    );

    let orchestrator = DebateOrchestrator::new(
        pool,
        Arc::new(OpenAiClientFactory::new(&config)),
        CredentialHealth::new(config.credential_cooldown),
    );
    let app = build_router(AppState::new(orchestrator, &config));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("📡 Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
