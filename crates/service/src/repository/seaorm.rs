use async_trait::async_trait;
use migration::MigratorTrait;
use models::{document, Document, Record, StoreError};
use sea_orm::DatabaseConnection;
use tracing::info;

use super::RecordRepository;

/// SeaORM-backed repository over the `document` table.
pub struct SeaOrmRecordRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRecordRepository {
    pub async fn connect(cfg: &configs::DatabaseConfig) -> Result<Self, StoreError> {
        let db = models::db::connect_with_config(cfg).await?;
        if cfg.run_migrations {
            migration::Migrator::up(&db, None).await?;
            info!("document store migrations applied");
        }
        Ok(Self { db })
    }
}

#[async_trait]
impl RecordRepository for SeaOrmRecordRepository {
    async fn create(&self, collection: &str, fields: Document) -> Result<Record, StoreError> {
        document::insert(&self.db, collection, fields).await
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        document::list(&self.db, collection).await
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Record, StoreError> {
        document::find(&self.db, collection, id).await
    }

    fn backend(&self) -> &'static str { "postgres" }
}
