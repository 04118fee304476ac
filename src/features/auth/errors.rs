//! Classification of provider failures into the fixed set of user-facing
//! messages each flow is allowed to show. The identity endpoints report
//! failures as bare codes (optionally followed by `" : detail"`); everything
//! unrecognized falls into the catch-all so new provider codes cannot leak
//! raw API text into the UI.

use crate::app_lib::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFailure {
    EmailInUse,
    WeakPassword,
    InvalidEmail,
    InvalidCredentials,
    AccountDisabled,
    RateLimited,
    ExpiredActionCode,
    AccountNotFound,
    Network,
    Other,
}

pub fn classify(error: &AppError) -> AuthFailure {
    match error {
        AppError::Network(_) | AppError::Timeout(_) => AuthFailure::Network,
        AppError::Http { message, .. } => classify_code(message),
        _ => AuthFailure::Other,
    }
}

fn classify_code(message: &str) -> AuthFailure {
    let code = message.split_whitespace().next().unwrap_or("");
    match code {
        "EMAIL_EXISTS" => AuthFailure::EmailInUse,
        "WEAK_PASSWORD" => AuthFailure::WeakPassword,
        "INVALID_EMAIL" | "MISSING_EMAIL" => AuthFailure::InvalidEmail,
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" | "MISSING_PASSWORD" => {
            AuthFailure::InvalidCredentials
        }
        "USER_DISABLED" => AuthFailure::AccountDisabled,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthFailure::RateLimited,
        "EXPIRED_OOB_CODE" | "INVALID_OOB_CODE" => AuthFailure::ExpiredActionCode,
        "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => AuthFailure::AccountNotFound,
        _ => AuthFailure::Other,
    }
}

impl AuthFailure {
    pub fn signup_message(self) -> &'static str {
        match self {
            AuthFailure::EmailInUse => "An account with this email already exists.",
            AuthFailure::WeakPassword => "Password should be at least 6 characters.",
            AuthFailure::InvalidEmail => "Email address looks invalid.",
            AuthFailure::Network => {
                "Network error. Please check your connection and try again."
            }
            _ => "Sign up failed. Please try again.",
        }
    }

    pub fn login_message(self) -> &'static str {
        match self {
            // Account existence is not disclosed on the login form.
            AuthFailure::InvalidCredentials | AuthFailure::AccountNotFound => {
                "Incorrect email or password."
            }
            AuthFailure::InvalidEmail => "Email address looks invalid.",
            AuthFailure::AccountDisabled => "This account has been disabled.",
            AuthFailure::RateLimited => {
                "Too many attempts. Please wait a moment and try again."
            }
            AuthFailure::Network => {
                "Network error. Please check your connection and try again."
            }
            _ => "Sign in failed. Please try again.",
        }
    }

    pub fn verify_message(self) -> &'static str {
        match self {
            AuthFailure::ExpiredActionCode => {
                "This verification link has expired or already been used. \
                 Please request a new verification email."
            }
            AuthFailure::AccountNotFound => {
                "We couldn't find an account associated with this verification link. \
                 The account may have been deleted."
            }
            AuthFailure::Network => {
                "Network error. Please check your internet connection and try the \
                 verification link again."
            }
            _ => "We couldn't verify your email. The link may have expired or been used already.",
        }
    }

    pub fn logout_message(self) -> &'static str {
        match self {
            AuthFailure::Network => {
                "Network error during logout. Please check your connection and try again."
            }
            _ => "Unable to log you out. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, AuthFailure};
    use crate::app_lib::AppError;

    fn http(message: &str) -> AppError {
        AppError::Http {
            status: 400,
            message: message.to_string(),
        }
    }

    #[test]
    fn provider_codes_classify_into_the_fixed_set() {
        assert_eq!(classify(&http("EMAIL_EXISTS")), AuthFailure::EmailInUse);
        assert_eq!(
            classify(&http("WEAK_PASSWORD : Password should be at least 6 characters")),
            AuthFailure::WeakPassword
        );
        assert_eq!(classify(&http("INVALID_EMAIL")), AuthFailure::InvalidEmail);
        assert_eq!(
            classify(&http("INVALID_LOGIN_CREDENTIALS")),
            AuthFailure::InvalidCredentials
        );
        assert_eq!(
            classify(&http("TOO_MANY_ATTEMPTS_TRY_LATER : Try again later")),
            AuthFailure::RateLimited
        );
        assert_eq!(classify(&http("USER_DISABLED")), AuthFailure::AccountDisabled);
        assert_eq!(
            classify(&http("EXPIRED_OOB_CODE")),
            AuthFailure::ExpiredActionCode
        );
        assert_eq!(
            classify(&http("INVALID_OOB_CODE")),
            AuthFailure::ExpiredActionCode
        );
        assert_eq!(
            classify(&http("EMAIL_NOT_FOUND")),
            AuthFailure::AccountNotFound
        );
    }

    #[test]
    fn transport_failures_classify_as_network() {
        assert_eq!(
            classify(&AppError::Network("offline".to_string())),
            AuthFailure::Network
        );
        assert_eq!(
            classify(&AppError::Timeout("slow".to_string())),
            AuthFailure::Network
        );
    }

    #[test]
    fn unknown_codes_fall_into_the_catch_all() {
        assert_eq!(classify(&http("QUOTA_EXCEEDED")), AuthFailure::Other);
        assert_eq!(classify(&http("")), AuthFailure::Other);
        assert_eq!(
            classify(&AppError::Parse("bad json".to_string())),
            AuthFailure::Other
        );
    }

    #[test]
    fn a_replayed_action_code_reads_as_expired_or_used() {
        let failure = classify(&http("INVALID_OOB_CODE"));
        assert_eq!(failure, AuthFailure::ExpiredActionCode);
        assert!(failure.verify_message().contains("expired or already been used"));
    }

    #[test]
    fn login_messages_do_not_disclose_account_existence() {
        assert_eq!(
            AuthFailure::AccountNotFound.login_message(),
            AuthFailure::InvalidCredentials.login_message()
        );
    }
}
