use std::fmt;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Pulls the provider's error code out of its REST error envelope,
/// `{"error": {"message": "EMAIL_EXISTS", ...}}`. Returns `None` when the body
/// is not that shape so callers can fall back to the raw text.
pub fn provider_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("error")?.get("message")?.as_str()?.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{provider_error_message, sanitize_body, AppError};

    #[test]
    fn provider_error_message_reads_the_envelope() {
        let body = r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#;
        assert_eq!(
            provider_error_message(body),
            Some("EMAIL_EXISTS".to_string())
        );
    }

    #[test]
    fn provider_error_message_keeps_code_detail_suffix() {
        let body =
            r#"{"error":{"message":"WEAK_PASSWORD : Password should be at least 6 characters"}}"#;
        assert_eq!(
            provider_error_message(body),
            Some("WEAK_PASSWORD : Password should be at least 6 characters".to_string())
        );
    }

    #[test]
    fn provider_error_message_rejects_other_shapes() {
        assert_eq!(provider_error_message("<html>502</html>"), None);
        assert_eq!(provider_error_message(r#"{"error":{}}"#), None);
        assert_eq!(provider_error_message(r#"{"error":{"message":"  "}}"#), None);
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body(String::new()), "Request failed.");
        assert_eq!(sanitize_body("  oops  ".to_string()), "oops");

        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), 200);
    }

    #[test]
    fn display_includes_status_for_http_errors() {
        let error = AppError::Http {
            status: 400,
            message: "EMAIL_EXISTS".to_string(),
        };
        assert_eq!(error.to_string(), "Request failed (400): EMAIL_EXISTS");
    }
}
