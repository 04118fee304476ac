//! Client helpers for the `sessions` collection, keyed by account id.

use crate::{
    app_lib::{self, api, config::AppConfig, AppError},
    features::sessions::types::SessionMarker,
};
use serde_json::Value;

/// Reads the session marker for the account, or `None` when no login is
/// currently recorded.
pub async fn fetch_session_marker(
    uid: &str,
    id_token: &str,
) -> Result<Option<SessionMarker>, AppError> {
    let config = AppConfig::load();
    let url = config.document_url("sessions", uid);
    let Some(document) = api::get_optional_json::<Value>(&url, id_token).await? else {
        return Ok(None);
    };

    match SessionMarker::from_document(&document) {
        Some(marker) => Ok(Some(marker)),
        None => Err(AppError::Parse("Malformed session document.".to_string())),
    }
}

/// Records a fresh login for the account.
pub async fn create_session_marker(uid: &str, id_token: &str) -> Result<(), AppError> {
    let config = AppConfig::load();
    let url = config.document_url("sessions", uid);
    let marker = SessionMarker::new(app_lib::now_millis());
    let _: Value = api::patch_json(&url, &marker.to_document(), id_token).await?;
    Ok(())
}

/// Removes the login record. Deleting an absent marker succeeds.
pub async fn delete_session_marker(uid: &str, id_token: &str) -> Result<(), AppError> {
    let config = AppConfig::load();
    let url = config.document_url("sessions", uid);
    api::delete_resource(&url, id_token).await
}
