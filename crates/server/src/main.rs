mod api;
mod app_config;
mod cli;
mod router;
mod state;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

async fn serve(config: &sagdec_core::Config) -> anyhow::Result<()> {
    config.log_summary();

    let state = Arc::new(app_config::build_app_state(config));
    let app = router::build_router(state, &config.server.cors_origin);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://localhost:{}", config.server.port);
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = app_config::load_config();
    config.validate().context("invalid configuration")?;

    let args: Vec<String> = std::env::args().collect();
    if cli::dispatch(&config, &args)? {
        return Ok(());
    }

    serve(&config).await
}
