//! Storage helpers for in-process backends.
//!
//! Contains the JSON-file-backed map used by the file repository.

pub mod json_map_store;

pub use json_map_store::JsonMapStore;
