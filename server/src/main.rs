use anyhow::Context;
use feedback_core::{AppConfig, Secrets};
use feedback_server::state::AppState;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    feedback_server::init_tracing();

    info!("Starting feedback-server v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_with_env().context("failed to load configuration")?;
    let secrets = Secrets::load().context("failed to load secrets")?;
    let state = AppState::from_config(&config, &secrets).context("failed to build ID source")?;

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_address))?;
    info!("Serving feedback form on http://{}", listener.local_addr()?);

    axum::serve(listener, feedback_server::router(Arc::new(state))).await?;
    Ok(())
}
