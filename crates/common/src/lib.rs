pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn error_body_serializes_nested() {
        let body = types::ErrorBody::new("notFound", "author with id x not found");
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["error"]["code"], "notFound");
        assert_eq!(v["error"]["message"], "author with id x not found");
    }
}
