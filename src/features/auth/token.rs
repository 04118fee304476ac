//! Tab-scoped persistence for the provider id token. Session storage survives
//! reloads within a tab and is dropped when the tab closes, which is the
//! persistence the rest of the app assumes. Storage failures (private
//! browsing, disabled storage) degrade to a signed-out state.

use web_sys::window;

const ID_TOKEN_KEY: &str = "hunt.session.id-token";

fn storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok().flatten()
}

pub fn store_id_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(ID_TOKEN_KEY, token);
    }
}

pub fn stored_id_token() -> Option<String> {
    storage()?
        .get_item(ID_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn clear_id_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(ID_TOKEN_KEY);
    }
}
