//! Output sanitization boundary
//!
//! Every record passes through a [`Sanitizer`] before leaving the service.
//! The host deployment decides what (if anything) to strip; this layer only
//! honors the boundary.

use serde_json::Value;

/// Filters record fields before they leave the service boundary
pub trait Sanitizer: Send + Sync {
    /// Sanitize one serialized record
    fn sanitize(&self, record: Value) -> Value;
}

/// No-op sanitizer (the default)
pub struct Passthrough;

impl Sanitizer for Passthrough {
    fn sanitize(&self, record: Value) -> Value {
        record
    }
}

/// Sanitizer that removes a fixed set of top-level fields
pub struct FieldStrip {
    fields: Vec<String>,
}

impl FieldStrip {
    pub fn new(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl Sanitizer for FieldStrip {
    fn sanitize(&self, mut record: Value) -> Value {
        if let Value::Object(map) = &mut record {
            for field in &self.fields {
                map.remove(field);
            }
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_passthrough_leaves_record_intact() {
        let record = json!({"id": 1, "title": "Hello"});
        assert_eq!(Passthrough.sanitize(record.clone()), record);
    }

    #[test]
    fn test_field_strip_removes_listed_fields() {
        let sanitizer = FieldStrip::new(["internalNotes", "revision"]);
        let sanitized = sanitizer.sanitize(json!({
            "id": 1,
            "title": "Hello",
            "internalNotes": "draft quality",
            "revision": 4
        }));
        assert_eq!(sanitized, json!({"id": 1, "title": "Hello"}));
    }

    #[test]
    fn test_field_strip_ignores_non_objects() {
        let sanitizer = FieldStrip::new(["title"]);
        assert_eq!(sanitizer.sanitize(json!([1, 2])), json!([1, 2]));
    }
}
