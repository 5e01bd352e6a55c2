//! Data model shared by every layer: schema-less `Record`s, the store error
//! taxonomy, and the sea-orm `document` entity backing the Postgres store.

pub mod errors;
pub mod record;
pub mod db;
pub mod document;

pub use errors::StoreError;
pub use record::{Document, Record};

#[cfg(test)]
mod tests;
