//! Service layer providing schema-checked record operations on top of models.
//! - Separates validation and presentation from data access.
//! - Data access sits behind the `RecordRepository` trait with memory, file
//!   and (feature `seaorm`) Postgres backends.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod storage;
pub mod repository;
pub mod schema;
pub mod records;
pub mod resources;
pub mod connection;
#[cfg(test)]
pub mod test_support;

pub use models::{Document, Record};
