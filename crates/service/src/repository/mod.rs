//! Data-access layer: one trait, several backends.
//!
//! Every call is a single atomic store operation. Backends never validate
//! fields; they store what they are given and assign the identifier.

use async_trait::async_trait;
use models::{Document, Record, StoreError};

pub mod memory;
pub mod file;
#[cfg(feature = "seaorm")]
pub mod seaorm;

pub use file::FileRecordRepository;
pub use memory::MemoryRecordRepository;
#[cfg(feature = "seaorm")]
pub use self::seaorm::SeaOrmRecordRepository;

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Persist `fields` under a fresh identifier and return the stored record.
    async fn create(&self, collection: &str, fields: Document) -> Result<Record, StoreError>;
    /// All records of `collection` in insertion order; empty when there are none.
    async fn find_all(&self, collection: &str) -> Result<Vec<Record>, StoreError>;
    /// The record with `id`, or `StoreError::NotFound`.
    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Record, StoreError>;
    /// Short backend name used in logs.
    fn backend(&self) -> &'static str;
}
