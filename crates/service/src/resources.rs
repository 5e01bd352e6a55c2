//! Resource definitions served by the API.

use models::Record;
use serde_json::Value;

use crate::schema::{FieldKind, FieldRule, Schema};

pub const AUTHORS: &str = "authors";
pub const MOVIES: &str = "movies";

/// `firstName`/`lastName` required, `middleName` optional. Responses carry a
/// derived `name` unless the author was submitted with one.
pub fn authors() -> Schema {
    Schema::new(AUTHORS, "author")
        .field(FieldRule::required("firstName", FieldKind::String))
        .field(FieldRule::optional("middleName", FieldKind::String))
        .field(FieldRule::required("lastName", FieldKind::String))
        .with_presenter(present_author)
}

pub fn movies() -> Schema {
    Schema::new(MOVIES, "movie")
        .field(FieldRule::required("title", FieldKind::String))
        .field(FieldRule::required("directedBy", FieldKind::String))
        .field(FieldRule::required("releaseYear", FieldKind::Integer))
}

fn present_author(record: &mut Record) {
    if record.fields.contains_key("name") {
        return;
    }
    let name = ["firstName", "middleName", "lastName"]
        .iter()
        .filter_map(|k| record.get(k).and_then(Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    record.fields.insert("name".to_string(), Value::String(name));
}
