use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::{Document, Record, StoreError};

use super::RecordRepository;
use crate::storage::JsonMapStore;

/// Durable single-node store: one JSON file mapping collection → records.
pub struct FileRecordRepository {
    store: Arc<JsonMapStore<String, Vec<Record>>>,
}

impl FileRecordRepository {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        Ok(Self { store: JsonMapStore::new(path).await? })
    }
}

#[async_trait]
impl RecordRepository for FileRecordRepository {
    async fn create(&self, collection: &str, fields: Document) -> Result<Record, StoreError> {
        let record = Record::assign(fields);
        self.store
            .update_map(|map| {
                map.entry(collection.to_string()).or_default().push(record.clone());
                Ok(())
            })
            .await?;
        Ok(record)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        Ok(self.store.get(&collection.to_string()).await.unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Record, StoreError> {
        self.store
            .get(&collection.to_string())
            .await
            .and_then(|records| records.into_iter().find(|r| r.id == id))
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    fn backend(&self) -> &'static str { "file" }
}
