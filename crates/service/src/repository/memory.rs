use std::collections::HashMap;

use async_trait::async_trait;
use models::{Document, Record, StoreError};
use tokio::sync::RwLock;

use super::RecordRepository;

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryRecordRepository {
    collections: RwLock<HashMap<String, Vec<Record>>>,
}

impl MemoryRecordRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl RecordRepository for MemoryRecordRepository {
    async fn create(&self, collection: &str, fields: Document) -> Result<Record, StoreError> {
        let record = Record::assign(fields);
        let mut map = self.collections.write().await;
        map.entry(collection.to_string()).or_default().push(record.clone());
        Ok(record)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        let map = self.collections.read().await;
        Ok(map.get(collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Record, StoreError> {
        let map = self.collections.read().await;
        map.get(collection)
            .and_then(|records| records.iter().find(|r| r.id == id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    fn backend(&self) -> &'static str { "memory" }
}
