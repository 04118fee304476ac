//! Auth feature covering the hosted provider's credential flows, verification
//! code handling, and session hydration. It keeps authentication logic out of
//! the UI and must stay aligned with the provider's REST contract. This module
//! touches security boundaries and must avoid logging the id token.
//!
//! Flow Overview: Signup creates the account, requests the verification email,
//! and writes the profile document. Login exchanges credentials, refuses
//! unverified accounts, checks for a concurrent session marker, and hydrates
//! the in-memory session. The verify route consumes the emailed action code
//! and forces a fresh login.

pub(crate) mod action_code;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod token;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireRole;
