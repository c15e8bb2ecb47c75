pub mod config;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod telemetry;
pub mod usecases;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::context::ExplorerContext;
use crate::models::platform::HostPlatform;
use crate::models::settings::Settings;
use crate::repositories::docker_client::DockerClient;
use crate::repositories::terminal::ShellTerminal;

const CONFIG_PATH_ENV: &str = "DOCKER_EXPLORER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn start() -> Result<()> {
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load_or_default(&config_path)?;
    let _telemetry = telemetry::init_telemetry(&config.telemetry)?;

    let client = Arc::new(DockerClient::new()?);
    let terminal = Arc::new(ShellTerminal::new());
    let ctx = ExplorerContext::new(
        client,
        terminal,
        Settings::from(&config),
        HostPlatform::current(),
    );

    let app = handlers::router(ctx);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Docker explorer listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Docker explorer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
