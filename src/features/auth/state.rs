//! Auth session state and context for the frontend. The provider hydrates the
//! session once on mount by validating the stored token against the provider
//! and reading the profile document, then exposes derived auth signals for
//! guards and routes. Only non-sensitive metadata is stored in memory; the id
//! token stays in tab-scoped session storage.

use crate::features::{
    auth::{client, token, types::UserSession},
    users,
};
use gloo_timers::callback::Timeout;
use leptos::{prelude::*, task::spawn_local};

/// How long a reported auth error stays on screen before it clears itself.
const ERROR_TOAST_MS: u32 = 5_000;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<UserSession>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided signals.
    fn new(
        session: RwSignal<Option<UserSession>>,
        loading: RwSignal<bool>,
        error: RwSignal<Option<String>>,
    ) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            loading,
            error,
            is_authenticated,
        }
    }

    /// Updates the in-memory session after login.
    pub fn set_session(&self, session: UserSession) {
        self.session.set(Some(session));
    }

    /// Clears the in-memory session, typically on logout.
    pub fn clear_session(&self) {
        self.session.set(None);
    }

    /// Publishes a flow error to the shared toast and clears it after a few
    /// seconds so stale failures do not linger across pages.
    pub fn report_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));
        let error = self.error;
        Timeout::new(ERROR_TOAST_MS, move || error.set(None)).forget();
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(None);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None);
    let auth = AuthContext::new(session, loading, error);
    provide_context(auth);

    spawn_local(async move {
        if let Some(restored) = hydrate_session().await {
            auth.set_session(restored);
        }
        loading.set(false);
    });

    view! { {children()} }
}

/// Validates the stored token and rebuilds the session. Tokens belonging to
/// unverified or no-longer-valid accounts are discarded so the app starts
/// signed out rather than half signed in.
async fn hydrate_session() -> Option<UserSession> {
    let id_token = token::stored_id_token()?;

    let account = match client::lookup_account(&id_token).await {
        Ok(account) => account,
        Err(error) => {
            leptos::logging::error!("session restore failed: {error}");
            token::clear_id_token();
            return None;
        }
    };

    if !account.email_verified {
        token::clear_id_token();
        return None;
    }

    let record = match users::client::fetch_user_record(&account.local_id, &id_token).await {
        Ok(Some(record)) => record,
        Ok(None) => return None,
        Err(error) => {
            leptos::logging::error!("profile read failed: {error}");
            return None;
        }
    };

    // The provider confirmed the email but the profile still says otherwise;
    // repair it so the two stay in sync.
    if !record.email_verified {
        if let Err(error) = users::client::mark_email_verified(&account.local_id, &id_token).await {
            leptos::logging::error!("profile repair failed: {error}");
        }
    }

    Some(UserSession {
        uid: account.local_id,
        email: account.email,
        role: record.role,
        email_verified: true,
    })
}

/// Returns the current auth context or a fallback signed-out context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        AuthContext::new(RwSignal::new(None), RwSignal::new(false), RwSignal::new(None))
    })
}
