use std::future::Future;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

use service::connection;

use crate::routes;
use crate::state::AppState;

/// The server as a value: configuration plus the state built from the store
/// connection. Constructed once by the entry point.
pub struct App {
    config: AppConfig,
    state: AppState,
}

impl App {
    /// Connect to the configured store and assemble handler state.
    pub async fn build(config: AppConfig) -> anyhow::Result<Self> {
        let conn = connection::connect(&config).await?;
        Ok(Self { config, state: AppState::new(conn) })
    }

    pub fn with_state(config: AppConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn router(&self) -> Router {
        routes::build_router(self.state.clone())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        let app = self.router();
        info!(%addr, backend = self.state.conn.backend(), "listening");
        axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
        info!("server stopped");
        Ok(())
    }

    /// Bind `server.host:server.port` and serve until Ctrl+C / SIGTERM.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.server.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| anyhow::anyhow!("cannot bind {addr}: {e}"))?;
        self.serve(listener, shutdown_signal()).await
    }
}

/// Public entry: build the app from configuration and run the HTTP server.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    App::build(config).await?.run().await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
