//! Builds the shared store connection once at startup.

use std::sync::Arc;

use configs::{AppConfig, StoreBackend};
use models::StoreError;
use tracing::info;

use crate::repository::{FileRecordRepository, MemoryRecordRepository, RecordRepository};

/// Store handle shared read-only by every request.
pub type Connection = Arc<dyn RecordRepository>;

pub async fn connect(cfg: &AppConfig) -> Result<Connection, StoreError> {
    let conn: Connection = match cfg.store.backend {
        StoreBackend::Memory => Arc::new(MemoryRecordRepository::new()),
        StoreBackend::File => Arc::new(FileRecordRepository::open(&cfg.store.path).await?),
        StoreBackend::Postgres => postgres(cfg).await?,
    };
    info!(backend = conn.backend(), "document store connected");
    Ok(conn)
}

#[cfg(feature = "seaorm")]
async fn postgres(cfg: &AppConfig) -> Result<Connection, StoreError> {
    let repo = crate::repository::SeaOrmRecordRepository::connect(&cfg.database).await?;
    Ok(Arc::new(repo))
}

#[cfg(not(feature = "seaorm"))]
async fn postgres(_cfg: &AppConfig) -> Result<Connection, StoreError> {
    Err(StoreError::Unavailable("built without the `seaorm` feature; postgres backend disabled".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_config_connects_to_memory() -> Result<(), StoreError> {
        let conn = connect(&AppConfig::default()).await?;
        assert_eq!(conn.backend(), "memory");
        Ok(())
    }

    #[tokio::test]
    async fn file_backend_opens_configured_path() -> Result<(), anyhow::Error> {
        let mut cfg = AppConfig::default();
        cfg.store.backend = StoreBackend::File;
        cfg.store.path = std::env::temp_dir()
            .join(format!("catalog_conn_{}.json", uuid::Uuid::new_v4()))
            .display()
            .to_string();
        let conn = connect(&cfg).await?;
        assert_eq!(conn.backend(), "file");
        let _ = tokio::fs::remove_file(&cfg.store.path).await;
        Ok(())
    }
}
