use std::sync::Arc;

use models::{Record, StoreError};
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::repository::RecordRepository;
use crate::schema::Schema;

/// Application service for one resource type.
/// Validates input against the resource schema before delegating to the
/// repository, and presents every record it returns.
pub struct RecordService<R: RecordRepository + ?Sized> {
    repo: Arc<R>,
    schema: Schema,
}

impl<R: RecordRepository + ?Sized> RecordService<R> {
    pub fn new(repo: Arc<R>, schema: Schema) -> Self { Self { repo, schema } }

    pub fn schema(&self) -> &Schema { &self.schema }

    #[instrument(skip(self), fields(collection = self.schema.collection))]
    pub async fn list(&self) -> Result<Vec<Record>, ServiceError> {
        let records = self.repo.find_all(self.schema.collection).await?;
        Ok(records.into_iter().map(|r| self.schema.present(r)).collect())
    }

    #[instrument(skip(self), fields(collection = self.schema.collection))]
    pub async fn find_by_id(&self, id: &str) -> Result<Record, ServiceError> {
        match self.repo.find_by_id(self.schema.collection, id).await {
            Ok(rec) => Ok(self.schema.present(rec)),
            Err(StoreError::NotFound { .. }) => Err(ServiceError::NotFound(format!(
                "{} with id {} not found",
                self.schema.label, id
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// Validate and persist a client payload. Invalid payloads never reach the store.
    #[instrument(skip(self, payload), fields(collection = self.schema.collection))]
    pub async fn create(&self, payload: Value) -> Result<Record, ServiceError> {
        let fields = self.schema.shape(payload)?;
        let rec = self.repo.create(self.schema.collection, fields).await?;
        info!(id = %rec.id, backend = self.repo.backend(), "record created");
        Ok(self.schema.present(rec))
    }
}
