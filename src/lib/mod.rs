//! Shared frontend utilities for API access, configuration, errors, and the
//! backend document codec.
//!
//! ## Core Authentication Flows
//!
//! ### Signup & Email Verification
//!
//! 1. **Create:** The client POSTs credentials to `accounts:signUp` and asks the
//!    provider to send a verification email via `accounts:sendOobCode`.
//! 2. **Profile:** A `users/{uid}` document is written with the default role and
//!    `emailVerified=false`.
//! 3. **Verification:** The emailed link lands on `/verify-email?oobCode=...`;
//!    the code is consumed via `accounts:update` and the profile is repaired.
//!
//! ### Sign-in & Session Markers
//!
//! Sign-in exchanges credentials at `accounts:signInWithPassword`, refuses
//! unverified accounts, and writes a `sessions/{uid}` marker so a second
//! concurrent login can be detected. The id token lives in tab-scoped session
//! storage only; it is never written to a document or logged.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod firestore;

pub(crate) const GIT_COMMIT: &str = match option_env!("HUNT_WEB_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// Current wall-clock time in epoch milliseconds, as the browser reports it.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

pub(crate) use errors::AppError;
