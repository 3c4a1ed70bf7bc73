//! `logdrop serve`: run the collector in the foreground.

pub mod config;

use anyhow::{Context, Result};
use log::{info, warn};
use logdrop_server::UploadServer;
use std::{net::IpAddr, path::PathBuf};

pub use config::ServeConfig;

/// Run the collector with CLI arguments and optional configuration
pub fn run_with_config(
    bind: Option<IpAddr>,
    port: Option<u16>,
    dir: Option<PathBuf>,
    max_body_bytes: Option<usize>,
    config: Option<ServeConfig>,
) -> Result<()> {
    let config = config
        .unwrap_or_default()
        .merge_cli(bind, port, dir, max_body_bytes)
        .into_server_config();

    info!("Starting log collector on {}", config.socket_addr());
    info!("Body limit: {} bytes", config.max_body_bytes);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    runtime.block_on(async {
        let server = UploadServer::bind(config).await?;
        info!("Log collector ready, press Ctrl+C to stop");
        server.run(shutdown_signal()).await
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
