//! Per-resource field rules checked at the service boundary.

use models::{Document, Record};
use serde_json::Value;

use crate::errors::ServiceError;

/// Keys clients may not set; the store owns them.
const RESERVED_KEYS: [&str; 2] = ["id", "_id"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-blank string.
    String,
    /// Number representable as `i64`.
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl FieldKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.as_str().is_some_and(|s| !s.trim().is_empty()),
            FieldKind::Integer => value.as_i64().is_some(),
            FieldKind::Number => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Object => value.is_object(),
            FieldKind::Array => value.is_array(),
        }
    }

    fn expectation(self) -> &'static str {
        match self {
            FieldKind::String => "a non-empty string",
            FieldKind::Integer => "an integer",
            FieldKind::Number => "a number",
            FieldKind::Boolean => "a boolean",
            FieldKind::Object => "an object",
            FieldKind::Array => "an array",
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false }
    }
}

/// Adds derived, API-facing fields to an outgoing record.
pub type Presenter = fn(&mut Record);

#[derive(Clone, Debug)]
pub struct Schema {
    /// Store collection the resource lives in.
    pub collection: &'static str,
    /// Singular name used in messages, e.g. `author`.
    pub label: &'static str,
    pub fields: Vec<FieldRule>,
    presenter: Option<Presenter>,
}

impl Schema {
    pub fn new(collection: &'static str, label: &'static str) -> Self {
        Self { collection, label, fields: Vec::new(), presenter: None }
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    pub fn with_presenter(mut self, presenter: Presenter) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Validate a client payload and return it as a document, unchanged.
    ///
    /// Undeclared fields pass through; the store is schema-less.
    pub fn shape(&self, payload: Value) -> Result<Document, ServiceError> {
        let Value::Object(doc) = payload else {
            return Err(ServiceError::validation("payload must be a JSON object"));
        };

        if let Some(key) = RESERVED_KEYS.iter().find(|k| doc.contains_key(**k)) {
            return Err(ServiceError::validation(format!("\"{key}\" is assigned by the store")));
        }

        for rule in &self.fields {
            match doc.get(rule.name) {
                None | Some(Value::Null) if rule.required => {
                    return Err(ServiceError::validation(format!("\"{}\" is required", rule.name)));
                }
                None | Some(Value::Null) => {}
                Some(value) if !rule.kind.accepts(value) => {
                    return Err(ServiceError::validation(format!(
                        "\"{}\" must be {}",
                        rule.name,
                        rule.kind.expectation()
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(doc)
    }

    pub fn present(&self, mut record: Record) -> Record {
        if let Some(presenter) = self.presenter {
            presenter(&mut record);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn movie() -> Schema {
        Schema::new("movies", "movie")
            .field(FieldRule::required("title", FieldKind::String))
            .field(FieldRule::required("releaseYear", FieldKind::Integer))
            .field(FieldRule::optional("tags", FieldKind::Array))
    }

    fn message(res: Result<Document, ServiceError>) -> String {
        match res {
            Err(ServiceError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_payload_is_returned_unchanged() {
        let payload = json!({"title": "Example Movie", "releaseYear": 1999, "extra": {"a": 1}});
        let doc = movie().shape(payload.clone()).unwrap();
        assert_eq!(Value::Object(doc), payload);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert_eq!(message(movie().shape(json!(["title"]))), "payload must be a JSON object");
        assert_eq!(message(movie().shape(Value::Null)), "payload must be a JSON object");
    }

    #[test]
    fn missing_or_null_required_field_is_rejected() {
        assert_eq!(message(movie().shape(json!({"releaseYear": 1999}))), "\"title\" is required");
        assert_eq!(
            message(movie().shape(json!({"title": null, "releaseYear": 1999}))),
            "\"title\" is required"
        );
    }

    #[test]
    fn wrong_kinds_are_rejected() {
        assert_eq!(
            message(movie().shape(json!({"title": "  ", "releaseYear": 1999}))),
            "\"title\" must be a non-empty string"
        );
        assert_eq!(
            message(movie().shape(json!({"title": "X", "releaseYear": "1999"}))),
            "\"releaseYear\" must be an integer"
        );
        assert_eq!(
            message(movie().shape(json!({"title": "X", "releaseYear": 1999.5}))),
            "\"releaseYear\" must be an integer"
        );
        assert_eq!(
            message(movie().shape(json!({"title": "X", "releaseYear": 1999, "tags": "a"}))),
            "\"tags\" must be an array"
        );
    }

    #[test]
    fn optional_field_may_be_absent_or_null() {
        assert!(movie().shape(json!({"title": "X", "releaseYear": 1, "tags": null})).is_ok());
    }

    #[test]
    fn client_ids_are_rejected() {
        assert_eq!(
            message(movie().shape(json!({"id": "1", "title": "X", "releaseYear": 1}))),
            "\"id\" is assigned by the store"
        );
        assert_eq!(
            message(movie().shape(json!({"_id": "1", "title": "X", "releaseYear": 1}))),
            "\"_id\" is assigned by the store"
        );
    }

    #[test]
    fn present_without_presenter_is_identity() {
        let rec = Record::new("a", Document::new());
        assert_eq!(movie().present(rec.clone()), rec);
    }
}
