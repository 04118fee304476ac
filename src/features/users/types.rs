use crate::app_lib::firestore::{self, FieldMap};
use serde_json::Value;

/// Dashboard role stored on the profile document. Anything the store hands
/// back that is not the admin label is treated as a regular user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn parse(label: &str) -> Self {
        if label == "admin" {
            Role::Admin
        } else {
            Role::User
        }
    }

    /// Route of the dashboard this role is allowed to see.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::User => "/user",
        }
    }
}

/// Profile document stored alongside each account, keyed by the account id.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRecord {
    pub email: String,
    pub role: Role,
    pub email_verified: bool,
    pub created_at: i64,
}

impl UserRecord {
    /// New sign-ups always start as unverified regular users; there is no way
    /// to request a different role at creation time.
    pub fn new(email: &str, created_at: i64) -> Self {
        Self {
            email: email.to_string(),
            role: Role::User,
            email_verified: false,
            created_at,
        }
    }

    pub fn to_document(&self) -> Value {
        FieldMap::new()
            .string("email", &self.email)
            .string("role", self.role.as_str())
            .boolean("emailVerified", self.email_verified)
            .integer("createdAt", self.created_at)
            .into_document()
    }

    /// Reads a profile from its document form. The email is required; the
    /// remaining fields decode leniently so older documents stay usable.
    pub fn from_document(document: &Value) -> Option<Self> {
        let email = firestore::string_field(document, "email")?;
        let role = firestore::string_field(document, "role")
            .map(|label| Role::parse(&label))
            .unwrap_or(Role::User);
        let email_verified = firestore::bool_field(document, "emailVerified").unwrap_or(false);
        let created_at = firestore::integer_field(document, "createdAt").unwrap_or(0);

        Some(Self {
            email,
            role,
            email_verified,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, UserRecord};
    use serde_json::json;

    #[test]
    fn new_profiles_are_always_unverified_regular_users() {
        let record = UserRecord::new("finder@example.com", 1_712_000_000_000);

        assert_eq!(record.role, Role::User);
        assert!(!record.email_verified);
        assert_eq!(record.email, "finder@example.com");
        assert_eq!(record.created_at, 1_712_000_000_000);
    }

    #[test]
    fn role_labels_round_trip_and_unknown_labels_demote() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("superuser"), Role::User);
        assert_eq!(Role::parse(""), Role::User);
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn dashboard_paths_match_roles() {
        assert_eq!(Role::Admin.dashboard_path(), "/admin");
        assert_eq!(Role::User.dashboard_path(), "/user");
    }

    #[test]
    fn to_document_writes_typed_fields() {
        let document = UserRecord::new("finder@example.com", 7).to_document();

        assert_eq!(
            document,
            json!({
                "fields": {
                    "email": { "stringValue": "finder@example.com" },
                    "role": { "stringValue": "user" },
                    "emailVerified": { "booleanValue": false },
                    "createdAt": { "integerValue": "7" },
                }
            })
        );
    }

    #[test]
    fn from_document_defaults_missing_role_and_flag() {
        let document = json!({
            "fields": {
                "email": { "stringValue": "finder@example.com" },
            }
        });

        let record = UserRecord::from_document(&document).expect("profile should decode");
        assert_eq!(record.role, Role::User);
        assert!(!record.email_verified);
        assert_eq!(record.created_at, 0);
    }

    #[test]
    fn from_document_requires_an_email() {
        let document = json!({
            "fields": {
                "role": { "stringValue": "admin" },
            }
        });

        assert!(UserRecord::from_document(&document).is_none());
    }

    #[test]
    fn from_document_reads_admin_profiles() {
        let document = json!({
            "fields": {
                "email": { "stringValue": "keeper@example.com" },
                "role": { "stringValue": "admin" },
                "emailVerified": { "booleanValue": true },
                "createdAt": { "integerValue": "1712000000000" },
            }
        });

        let record = UserRecord::from_document(&document).expect("profile should decode");
        assert_eq!(record.role, Role::Admin);
        assert!(record.email_verified);
        assert_eq!(record.created_at, 1_712_000_000_000);
    }
}
