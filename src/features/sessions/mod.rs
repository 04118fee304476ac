//! Session marker documents: one per account, written at sign-in and removed
//! at sign-out so a second concurrent login can be detected. The check is a
//! plain read-then-write with no transaction; two near-simultaneous sign-ins
//! can both miss the other's marker.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
