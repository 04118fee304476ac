use crate::app_lib::firestore::{self, FieldMap};
use serde_json::Value;

/// Marker document recording that an account currently has an active login.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionMarker {
    pub active: bool,
    pub timestamp: i64,
}

impl SessionMarker {
    pub fn new(timestamp: i64) -> Self {
        Self {
            active: true,
            timestamp,
        }
    }

    pub fn to_document(&self) -> Value {
        FieldMap::new()
            .boolean("active", self.active)
            .integer("timestamp", self.timestamp)
            .into_document()
    }

    pub fn from_document(document: &Value) -> Option<Self> {
        Some(Self {
            active: firestore::bool_field(document, "active")?,
            timestamp: firestore::integer_field(document, "timestamp").unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SessionMarker;
    use serde_json::json;

    #[test]
    fn new_markers_are_active() {
        let marker = SessionMarker::new(1_712_000_000_000);
        assert!(marker.active);
        assert_eq!(marker.timestamp, 1_712_000_000_000);
    }

    #[test]
    fn to_document_writes_typed_fields() {
        assert_eq!(
            SessionMarker::new(99).to_document(),
            json!({
                "fields": {
                    "active": { "booleanValue": true },
                    "timestamp": { "integerValue": "99" },
                }
            })
        );
    }

    #[test]
    fn from_document_requires_the_active_flag() {
        let document = json!({
            "fields": {
                "timestamp": { "integerValue": "99" },
            }
        });
        assert!(SessionMarker::from_document(&document).is_none());

        let document = json!({
            "fields": {
                "active": { "booleanValue": true },
            }
        });
        let marker = SessionMarker::from_document(&document).expect("marker should decode");
        assert!(marker.active);
        assert_eq!(marker.timestamp, 0);
    }
}
