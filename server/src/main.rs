use anyhow::Result;
use log::{info, warn};
use logdrop_server::{ServerConfig, UploadServer};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting log collector...");

    let config = ServerConfig::from_env();
    let server = UploadServer::bind(config).await?;

    server
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Shutdown requested");
        })
        .await
}
