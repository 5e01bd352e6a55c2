use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::StoreError;

/// Open a pooled connection. Any failure here means the store cannot be reached.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, StoreError> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;
    info!(max_connections = cfg.max_connections, "database pool ready");
    Ok(db)
}

/// Connect using `DATABASE_URL`, for tests and tooling.
pub async fn connect_from_env() -> Result<DatabaseConnection, StoreError> {
    let url = std::env::var("DATABASE_URL")
        .map_err(|_| StoreError::Unavailable("DATABASE_URL is not set".into()))?;
    let cfg = DatabaseConfig { url, ..DatabaseConfig::default() };
    connect_with_config(&cfg).await
}
