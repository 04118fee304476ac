//! Typed-value codec for the document store's REST shape. Documents travel as
//! `{"fields": {"name": {"stringValue": ...}}}` maps; `integerValue` is carried
//! as a decimal string on the wire. Feature types convert through this module
//! instead of hand-rolling JSON in their clients.

use serde_json::{json, Map, Value};

/// Builder for a document's `fields` map.
pub struct FieldMap {
    fields: Map<String, Value>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    pub fn string(mut self, name: &str, value: &str) -> Self {
        self.fields
            .insert(name.to_string(), json!({ "stringValue": value }));
        self
    }

    pub fn boolean(mut self, name: &str, value: bool) -> Self {
        self.fields
            .insert(name.to_string(), json!({ "booleanValue": value }));
        self
    }

    pub fn integer(mut self, name: &str, value: i64) -> Self {
        self.fields
            .insert(name.to_string(), json!({ "integerValue": value.to_string() }));
        self
    }

    /// Wraps the accumulated fields in the document envelope expected by the
    /// REST write endpoints.
    pub fn into_document(self) -> Value {
        json!({ "fields": Value::Object(self.fields) })
    }
}

fn field<'a>(document: &'a Value, name: &str) -> Option<&'a Value> {
    document.get("fields")?.get(name)
}

pub fn string_field(document: &Value, name: &str) -> Option<String> {
    field(document, name)?
        .get("stringValue")?
        .as_str()
        .map(str::to_string)
}

pub fn bool_field(document: &Value, name: &str) -> Option<bool> {
    field(document, name)?.get("booleanValue")?.as_bool()
}

pub fn integer_field(document: &Value, name: &str) -> Option<i64> {
    field(document, name)?
        .get("integerValue")?
        .as_str()?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::{bool_field, integer_field, string_field, FieldMap};
    use serde_json::json;

    #[test]
    fn field_map_builds_the_wire_envelope() {
        let document = FieldMap::new()
            .string("email", "finder@example.com")
            .boolean("emailVerified", false)
            .integer("createdAt", 1_712_000_000_000)
            .into_document();

        assert_eq!(
            document,
            json!({
                "fields": {
                    "email": { "stringValue": "finder@example.com" },
                    "emailVerified": { "booleanValue": false },
                    "createdAt": { "integerValue": "1712000000000" },
                }
            })
        );
    }

    #[test]
    fn extractors_read_typed_values() {
        let document = json!({
            "fields": {
                "role": { "stringValue": "admin" },
                "active": { "booleanValue": true },
                "timestamp": { "integerValue": "42" },
            }
        });

        assert_eq!(string_field(&document, "role"), Some("admin".to_string()));
        assert_eq!(bool_field(&document, "active"), Some(true));
        assert_eq!(integer_field(&document, "timestamp"), Some(42));
    }

    #[test]
    fn extractors_reject_missing_or_mistyped_fields() {
        let document = json!({
            "fields": {
                "active": { "stringValue": "true" },
                "timestamp": { "integerValue": 42 },
            }
        });

        assert_eq!(string_field(&document, "role"), None);
        assert_eq!(bool_field(&document, "active"), None);
        // Wire integers are strings; a bare JSON number is not valid here.
        assert_eq!(integer_field(&document, "timestamp"), None);
        assert_eq!(integer_field(&json!({}), "timestamp"), None);
    }
}
