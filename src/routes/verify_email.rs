//! Verification landing route. The emailed link carries a one-time action
//! code in the `oobCode` query parameter; the page consumes it, repairs the
//! profile when the current session belongs to the verified account, and
//! forces a fresh login. The code is scrubbed from the URL once read.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::{
    action_code, client, errors,
    state::{use_auth, AuthContext},
    token,
};
use crate::features::users;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen::JsValue;
use web_sys::window;

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Idle,
    MissingCode,
    Pending,
    Success,
    Error(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth();
    let (status, set_status) = signal(VerifyStatus::Idle);

    let verify_action = Action::new_local(move |code: &String| {
        let code = code.clone();
        async move { run_verification(auth, code).await }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => set_status.set(VerifyStatus::Success),
                Err(err) => {
                    leptos::logging::error!("verification failed: {err}");
                    set_status.set(VerifyStatus::Error(
                        errors::classify(&err).verify_message().to_string(),
                    ));
                }
            }
        }
    });

    Effect::new(move |_| {
        if status.get_untracked() != VerifyStatus::Idle {
            return;
        }

        match code_from_location() {
            Some(code) => {
                set_status.set(VerifyStatus::Pending);
                verify_action.dispatch(code);
            }
            None => set_status.set(VerifyStatus::MissingCode),
        }

        clear_code_from_url();
    });

    view! {
        <AppShell>
            <div class="mx-auto max-w-md">
                <div class="border-4 border-gray-700 bg-black p-6 shadow-lg">
                    <div class="mb-4 flex items-center justify-between font-mono text-sm text-green-400">
                        <span>"SYSTEM.VERIFICATION"</span>
                        <span class="inline-block h-4 w-2 animate-pulse bg-green-400"></span>
                    </div>
                    <div class="font-mono">
                        {move || match status.get() {
                            VerifyStatus::Idle | VerifyStatus::Pending => view! {
                                <div class="text-center">
                                    <Spinner />
                                    <p class="mt-3 text-white">"VERIFYING EMAIL..."</p>
                                </div>
                            }
                            .into_any(),
                            VerifyStatus::Success => view! {
                                <div>
                                    <h3 class="mb-2 text-center text-lg text-green-400">
                                        "EMAIL VERIFIED SUCCESSFULLY"
                                    </h3>
                                    <p class="mb-6 text-center text-gray-300">
                                        "Your email has been verified. You can now log in to your account."
                                    </p>
                                    <A
                                        href="/login"
                                        {..}
                                        class="block w-full bg-white py-2 text-center font-bold text-black transition-colors hover:bg-gray-300"
                                    >
                                        "PROCEED TO LOGIN →"
                                    </A>
                                </div>
                            }
                            .into_any(),
                            VerifyStatus::MissingCode => view! {
                                <div>
                                    <h3 class="mb-2 text-center text-lg text-red-400">
                                        "VERIFICATION FAILED"
                                    </h3>
                                    <div class="mb-4">
                                        <Alert
                                            kind=AlertKind::Error
                                            message="The verification link is invalid. It may be missing necessary information."
                                                .to_string()
                                        />
                                    </div>
                                    <A
                                        href="/"
                                        {..}
                                        class="block w-full bg-white py-2 text-center font-bold text-black transition-colors hover:bg-gray-300"
                                    >
                                        "RETURN HOME →"
                                    </A>
                                </div>
                            }
                            .into_any(),
                            VerifyStatus::Error(message) => view! {
                                <div>
                                    <h3 class="mb-2 text-center text-lg text-red-400">
                                        "VERIFICATION FAILED"
                                    </h3>
                                    <div class="mb-4">
                                        <Alert kind=AlertKind::Error message=message />
                                    </div>
                                    <div class="flex flex-col space-y-3">
                                        <A
                                            href="/login"
                                            {..}
                                            class="block w-full bg-white py-2 text-center font-bold text-black transition-colors hover:bg-gray-300"
                                        >
                                            "RETURN TO LOGIN →"
                                        </A>
                                        <A
                                            href="/signup"
                                            {..}
                                            class="block w-full bg-gray-700 py-2 text-center font-bold text-white transition-colors hover:bg-gray-600"
                                        >
                                            "CREATE A NEW ACCOUNT"
                                        </A>
                                    </div>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
                <div class="mt-6 flex items-center justify-center font-mono text-xs text-gray-500">
                    <span class="mr-2">"$"</span>
                    <span class="animate-pulse">"EMAIL.VERIFICATION.PROCESS_"</span>
                </div>
            </div>
        </AppShell>
    }
}

/// Applies the action code at the provider, then syncs the local session: if
/// the stored token belongs to the freshly verified account, its profile is
/// marked verified and the session is ended so the next login starts clean.
async fn run_verification(auth: AuthContext, code: String) -> Result<(), AppError> {
    let applied = client::apply_action_code(&code).await?;
    finalize_current_session(auth, applied.email.as_deref()).await
}

async fn finalize_current_session(
    auth: AuthContext,
    verified_email: Option<&str>,
) -> Result<(), AppError> {
    let Some(id_token) = token::stored_id_token() else {
        return Ok(());
    };

    let account = client::lookup_account(&id_token).await?;
    if verified_email.is_some_and(|email| email != account.email) {
        // The link belongs to a different account; leave this session alone.
        return Ok(());
    }

    if users::client::fetch_user_record(&account.local_id, &id_token)
        .await?
        .is_some()
    {
        users::client::mark_email_verified(&account.local_id, &id_token).await?;
    }

    // Force a fresh login with the verified account.
    token::clear_id_token();
    auth.clear_session();
    Ok(())
}

fn code_from_location() -> Option<String> {
    let search = window()?.location().search().ok()?;
    action_code::code_from_query(&search)
}

fn clear_code_from_url() {
    let Some(window) = window() else {
        return;
    };
    let history = match window.history() {
        Ok(history) => history,
        Err(_) => return,
    };
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some("/verify-email"));
}
