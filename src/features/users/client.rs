//! Client helpers for the `users` collection. These functions keep document
//! paths centralized and assume the backend's security rules enforce that a
//! token can only touch its own profile.

use crate::{
    app_lib::{api, config::AppConfig, AppError},
    features::users::types::UserRecord,
};
use serde_json::Value;

/// Fetches the profile for the given account id, or `None` when no profile
/// document has been written yet.
pub async fn fetch_user_record(uid: &str, id_token: &str) -> Result<Option<UserRecord>, AppError> {
    let config = AppConfig::load();
    let url = config.document_url("users", uid);
    let Some(document) = api::get_optional_json::<Value>(&url, id_token).await? else {
        return Ok(None);
    };

    match UserRecord::from_document(&document) {
        Some(record) => Ok(Some(record)),
        None => Err(AppError::Parse("Malformed user profile document.".to_string())),
    }
}

/// Writes the full profile document for a new account.
pub async fn create_user_record(
    uid: &str,
    id_token: &str,
    record: &UserRecord,
) -> Result<(), AppError> {
    let config = AppConfig::load();
    let url = config.document_url("users", uid);
    let _: Value = api::patch_json(&url, &record.to_document(), id_token).await?;
    Ok(())
}

/// Flips `emailVerified` on the profile without touching the role or any other
/// field; the update is field-masked so a concurrent writer cannot be clobbered.
pub async fn mark_email_verified(uid: &str, id_token: &str) -> Result<(), AppError> {
    let config = AppConfig::load();
    let url = format!(
        "{}?updateMask.fieldPaths=emailVerified",
        config.document_url("users", uid)
    );
    let body = crate::app_lib::firestore::FieldMap::new()
        .boolean("emailVerified", true)
        .into_document();
    let _: Value = api::patch_json(&url, &body, id_token).await?;
    Ok(())
}
