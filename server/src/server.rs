use anyhow::{Context, Result};
use axum::Router;
use log::info;
use std::{future::Future, net::SocketAddr};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use crate::{app::build_router, config::ServerConfig, state::AppState};

/// A bound upload listener, ready to serve.
///
/// Connections are handled concurrently on the tokio runtime. Every request
/// stands alone: one body in, one file and one response out.
pub struct UploadServer {
    config: ServerConfig,
    listener: TcpListener,
    router: Router,
}

impl UploadServer {
    /// Prepares the storage directory and binds the listener.
    ///
    /// Port `0` binds an ephemeral port; see [`UploadServer::local_addr`].
    pub async fn bind(config: ServerConfig) -> Result<Self> {
        let state = AppState::new(&config);
        state.store.ensure_dir().with_context(|| {
            format!(
                "Failed to prepare storage directory {}",
                config.storage_dir.display()
            )
        })?;

        let addr = config.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        Ok(Self {
            config,
            listener,
            router: build_router(state),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("Failed to read listener address")
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serves until `shutdown` resolves, then drains open connections.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Listening on {}", self.local_addr()?);
        info!("Storing uploads in {}", self.config.storage_dir.display());

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("Server error")?;

        info!("Upload server stopped");
        Ok(())
    }

    /// Spawns the server onto the current tokio runtime.
    pub fn start(self) -> Result<RunningServer> {
        let local_addr = self.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(self.run(async move {
            let _ = shutdown_rx.await;
        }));

        Ok(RunningServer {
            local_addr,
            shutdown: shutdown_tx,
            task,
        })
    }
}

/// Handle to a server started with [`UploadServer::start`].
pub struct RunningServer {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<Result<()>>,
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and waits for in-flight requests.
    pub async fn stop(self) -> Result<()> {
        let _ = self.shutdown.send(());
        self.task.await.context("Upload server task failed")?
    }
}
