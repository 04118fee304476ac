//! Helpers for the one-time action code carried in the emailed verification
//! link, e.g. `/verify-email?oobCode=AbC123&mode=verifyEmail`.

/// Extracts the `oobCode` parameter from a raw query string. Accepts the
/// string with or without its leading `?` and ignores unrelated parameters.
pub fn code_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() != Some("oobCode") {
            continue;
        }
        let value = parts.next().unwrap_or("").trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::code_from_query;

    #[test]
    fn reads_the_code_with_and_without_the_question_mark() {
        assert_eq!(
            code_from_query("?oobCode=AbC123"),
            Some("AbC123".to_string())
        );
        assert_eq!(code_from_query("oobCode=AbC123"), Some("AbC123".to_string()));
    }

    #[test]
    fn ignores_unrelated_parameters() {
        assert_eq!(
            code_from_query("?mode=verifyEmail&oobCode=AbC123&apiKey=k"),
            Some("AbC123".to_string())
        );
    }

    #[test]
    fn missing_or_empty_codes_yield_none() {
        assert_eq!(code_from_query(""), None);
        assert_eq!(code_from_query("?mode=verifyEmail"), None);
        assert_eq!(code_from_query("?oobCode="), None);
        assert_eq!(code_from_query("?oobCode=   "), None);
        // A parameter that merely starts with the name does not match.
        assert_eq!(code_from_query("?oobCodeX=AbC123"), None);
    }
}
