//! HTTP helpers for the hosted backend's JSON APIs with consistent timeouts and
//! error handling. Feature clients use these helpers to avoid duplicating
//! request setup and to enforce a predictable timeout policy. The helpers do
//! not store tokens; callers pass the bearer token per request and must never
//! log it.

use super::errors::{provider_error_message, sanitize_body, AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Posts JSON to an identity endpoint and parses a JSON response. These
/// endpoints are keyed by the project API key; no bearer token is attached.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, AppError> {
    let payload = encode_body(body)?;
    let response = send_with_timeout(move |signal| {
        Request::post(url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Fetches a JSON resource with a bearer token, returning `None` on 404. Used
/// for document reads where a missing document is a normal outcome.
pub async fn get_optional_json<T: DeserializeOwned>(
    url: &str,
    bearer: &str,
) -> Result<Option<T>, AppError> {
    let authorization = format!("Bearer {bearer}");
    let response = send_with_timeout(move |signal| {
        Request::get(url)
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.status() == 404 {
        return Ok(None);
    }
    handle_json_response(response).await.map(Some)
}

/// Patches a JSON resource with a bearer token and parses the JSON response.
/// Document writes go through here; the store treats a patch of a missing
/// document as a create.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    bearer: &str,
) -> Result<T, AppError> {
    let payload = encode_body(body)?;
    let authorization = format!("Bearer {bearer}");
    let response = send_with_timeout(move |signal| {
        Request::patch(url)
            .header("Content-Type", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Deletes a resource with a bearer token. The store returns an empty body on
/// success, and deleting an absent document succeeds.
pub async fn delete_resource(url: &str, bearer: &str) -> Result<(), AppError> {
    let authorization = format!("Bearer {bearer}");
    let response = send_with_timeout(move |signal| {
        Request::delete(url)
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, AppError> {
    to_string(body).map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with the provider's error
/// code when the body carries its envelope.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: gloo_net::http::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = provider_error_message(&body).unwrap_or_else(|| sanitize_body(body));
    AppError::Http { status, message }
}
