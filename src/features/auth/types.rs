//! Request and response types for the provider's identity endpoints. These
//! payloads carry credentials and id tokens, so they must never be logged.

use crate::features::users::types::Role;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

impl CredentialsRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            return_secure_token: true,
        }
    }
}

/// Token bundle returned by `accounts:signUp` and `accounts:signInWithPassword`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub id_token: String,
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOobCodeRequest {
    pub request_type: String,
    pub id_token: String,
}

impl SendOobCodeRequest {
    pub fn verify_email(id_token: &str) -> Self {
        Self {
            request_type: "VERIFY_EMAIL".to_string(),
            id_token: id_token.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyOobCodeRequest {
    pub oob_code: String,
}

/// Result of consuming an emailed action code via `accounts:update`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedOobCode {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub id_token: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<AccountInfo>,
}

/// Account summary returned by `accounts:lookup`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
}

/// In-memory session published to the view tree after a verified sign-in.
/// Holds only non-sensitive metadata; the id token stays in session storage.
#[derive(Clone, Debug, PartialEq)]
pub struct UserSession {
    pub uid: String,
    pub email: String,
    pub role: Role,
    pub email_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_request_serializes_camel_case() {
        let request = CredentialsRequest::new("finder@example.com", "hunt-2024");
        let json = serde_json::to_value(&request).expect("request should encode");

        assert_eq!(
            json,
            serde_json::json!({
                "email": "finder@example.com",
                "password": "hunt-2024",
                "returnSecureToken": true,
            })
        );
    }

    #[test]
    fn auth_tokens_decode_a_sign_in_response() {
        let body = r#"{
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "u-123",
            "email": "finder@example.com",
            "displayName": "",
            "idToken": "tok-abc",
            "registered": true,
            "refreshToken": "refresh-xyz",
            "expiresIn": "3600"
        }"#;

        let tokens: AuthTokens = serde_json::from_str(body).expect("response should decode");
        assert_eq!(tokens.local_id, "u-123");
        assert_eq!(tokens.id_token, "tok-abc");
        assert_eq!(tokens.expires_in, "3600");
    }

    #[test]
    fn lookup_response_decodes_accounts_and_tolerates_missing_flags() {
        let body = r#"{
            "kind": "identitytoolkit#GetAccountInfoResponse",
            "users": [{
                "localId": "u-123",
                "email": "finder@example.com",
                "emailVerified": true
            }]
        }"#;
        let response: LookupResponse = serde_json::from_str(body).expect("response should decode");
        assert_eq!(response.users.len(), 1);
        assert!(response.users[0].email_verified);

        let bare = r#"{"users": [{"localId": "u-1", "email": "a@b.c"}]}"#;
        let response: LookupResponse = serde_json::from_str(bare).expect("response should decode");
        assert!(!response.users[0].email_verified);

        let empty = r#"{"kind": "identitytoolkit#GetAccountInfoResponse"}"#;
        let response: LookupResponse = serde_json::from_str(empty).expect("response should decode");
        assert!(response.users.is_empty());
    }

    #[test]
    fn send_oob_code_request_uses_the_verify_email_kind() {
        let request = SendOobCodeRequest::verify_email("tok-abc");
        let json = serde_json::to_value(&request).expect("request should encode");

        assert_eq!(json["requestType"], "VERIFY_EMAIL");
        assert_eq!(json["idToken"], "tok-abc");
    }

    #[test]
    fn applied_oob_code_tolerates_a_missing_email() {
        let applied: AppliedOobCode =
            serde_json::from_str(r#"{}"#).expect("response should decode");
        assert!(applied.email.is_none());
    }
}
