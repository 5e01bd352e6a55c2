#![cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use models::{Document, Record, StoreError};

use crate::repository::{MemoryRecordRepository, RecordRepository};

/// Repository whose store can never be reached.
pub struct FailingRepository;

#[async_trait]
impl RecordRepository for FailingRepository {
    async fn create(&self, _collection: &str, _fields: Document) -> Result<Record, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn find_all(&self, _collection: &str) -> Result<Vec<Record>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn find_by_id(&self, _collection: &str, _id: &str) -> Result<Record, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    fn backend(&self) -> &'static str { "failing" }
}

/// In-memory repository counting every store call.
#[derive(Default)]
pub struct RecordingRepository {
    inner: MemoryRecordRepository,
    calls: AtomicUsize,
}

impl RecordingRepository {
    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
}

#[async_trait]
impl RecordRepository for RecordingRepository {
    async fn create(&self, collection: &str, fields: Document) -> Result<Record, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create(collection, fields).await
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_all(collection).await
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Record, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(collection, id).await
    }

    fn backend(&self) -> &'static str { "recording" }
}
