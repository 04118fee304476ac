//! User profile documents: one per account, holding the email, the dashboard
//! role, and the verification flag. The profile is written at sign-up and
//! repaired by the verification flow.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
