//! Client wrappers for the provider's identity endpoints plus the sign-out
//! orchestration. These helpers centralize endpoint names and keep id-token
//! handling out of route code.

use crate::{
    app_lib::{api, config::AppConfig, AppError},
    features::{
        auth::{
            errors,
            state::AuthContext,
            token,
            types::{
                AccountInfo, AppliedOobCode, ApplyOobCodeRequest, AuthTokens, CredentialsRequest,
                LookupRequest, LookupResponse, SendOobCodeRequest,
            },
        },
        sessions,
    },
};
use leptos::prelude::GetUntracked;

/// Creates a new account from an email and password.
pub async fn sign_up(email: &str, password: &str) -> Result<AuthTokens, AppError> {
    let config = AppConfig::load();
    let request = CredentialsRequest::new(email, password);
    api::post_json(&config.identity_endpoint("signUp"), &request).await
}

/// Exchanges credentials for a token bundle.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthTokens, AppError> {
    let config = AppConfig::load();
    let request = CredentialsRequest::new(email, password);
    api::post_json(&config.identity_endpoint("signInWithPassword"), &request).await
}

/// Asks the provider to email a verification link to the token's account.
pub async fn send_verification_email(id_token: &str) -> Result<(), AppError> {
    let config = AppConfig::load();
    let request = SendOobCodeRequest::verify_email(id_token);
    let _: serde_json::Value =
        api::post_json(&config.identity_endpoint("sendOobCode"), &request).await?;
    Ok(())
}

/// Consumes an emailed action code, marking the account's email confirmed at
/// the provider. A second application of the same code fails with an
/// expired/used error.
pub async fn apply_action_code(oob_code: &str) -> Result<AppliedOobCode, AppError> {
    let config = AppConfig::load();
    let request = ApplyOobCodeRequest {
        oob_code: oob_code.to_string(),
    };
    api::post_json(&config.identity_endpoint("update"), &request).await
}

/// Resolves a token to its account summary, including the provider-side
/// verification flag.
pub async fn lookup_account(id_token: &str) -> Result<AccountInfo, AppError> {
    let config = AppConfig::load();
    let request = LookupRequest {
        id_token: id_token.to_string(),
    };
    let response: LookupResponse =
        api::post_json(&config.identity_endpoint("lookup"), &request).await?;
    response
        .users
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Parse("Account lookup returned no accounts.".to_string()))
}

/// Ends the current login: removes the session marker, drops the stored token,
/// and clears the in-memory session. Returns `false` when the marker could not
/// be removed; the session is left intact so the user can retry.
pub async fn sign_out(auth: &AuthContext) -> bool {
    if let Some(session) = auth.session.get_untracked() {
        if let Some(id_token) = token::stored_id_token() {
            if let Err(error) =
                sessions::client::delete_session_marker(&session.uid, &id_token).await
            {
                leptos::logging::error!("sign-out failed: {error}");
                auth.report_error(errors::classify(&error).logout_message());
                return false;
            }
        }
    }

    token::clear_id_token();
    auth.clear_session();
    true
}
