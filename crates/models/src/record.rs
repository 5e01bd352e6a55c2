use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Named fields of a stored document.
pub type Document = serde_json::Map<String, Value>;

/// A persisted document: store-assigned identifier plus its fields.
///
/// Serialized flat, `{"id": "...", ...fields}`, matching what clients submit
/// minus the identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: Document,
}

impl Record {
    pub fn new(id: impl Into<String>, fields: Document) -> Self {
        Self { id: id.into(), fields }
    }

    /// Assign a fresh identifier to `fields`.
    pub fn assign(fields: Document) -> Self {
        Self::new(new_id(), fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Opaque record identifier: 32 lowercase hex characters.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
