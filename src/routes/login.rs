//! Login route driving the full sign-in flow: credential exchange, the
//! verified-email check, the concurrent-session check, and the session marker
//! write, ending on the dashboard that matches the stored role. Unverified
//! accounts are signed back out and offered a resend affordance.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{
    client, errors,
    state::{use_auth, AuthContext},
    token,
    types::UserSession,
};
use crate::features::users::types::Role;
use crate::features::{sessions, users};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
/// Captures login form input for the async action without borrowing signals.
struct LoginInput {
    email: String,
    password: String,
}

/// Outcome of a sign-in attempt beyond transport failures.
#[derive(Clone)]
enum LoginOutcome {
    SignedIn { path: &'static str },
    Unverified { id_token: String },
    ActiveSessionElsewhere,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let unverified_token = RwSignal::new(None::<String>);
    let (resend_notice, set_resend_notice) = signal::<Option<(AlertKind, String)>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move { run_sign_in(auth, input).await }
    });

    let resend_action = Action::new_local(move |id_token: &String| {
        let id_token = id_token.clone();
        async move { client::send_verification_email(&id_token).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(LoginOutcome::SignedIn { path }) => {
                    navigate(path, Default::default());
                }
                Ok(LoginOutcome::Unverified { id_token }) => {
                    unverified_token.set(Some(id_token));
                }
                Ok(LoginOutcome::ActiveSessionElsewhere) => {
                    set_error.set(Some("You are logged in on another device.".to_string()));
                }
                Err(err) => {
                    set_error.set(Some(errors::classify(&err).login_message().to_string()));
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            let notice = match result {
                Ok(()) => (
                    AlertKind::Success,
                    "Verification email sent. Check your inbox.".to_string(),
                ),
                Err(err) => (
                    AlertKind::Error,
                    errors::classify(&err).signup_message().to_string(),
                ),
            };
            set_resend_notice.set(Some(notice));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        unverified_token.set(None);
        set_resend_notice.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    let on_resend = Callback::new(move |_| {
        if let Some(id_token) = unverified_token.get_untracked() {
            set_resend_notice.set(None);
            resend_action.dispatch(id_token);
        }
    });

    view! {
        <AppShell>
            <div class="mx-auto max-w-sm">
                <h1 class="mb-4 text-center text-2xl font-bold">"Login"</h1>
                <form class="space-y-4" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Email"
                        class="w-full border border-gray-700 bg-gray-900 px-4 py-2 text-white focus:border-green-400 focus:outline-none"
                        autocomplete="email"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        class="w-full border border-gray-700 bg-gray-900 px-4 py-2 text-white focus:border-green-400 focus:outline-none"
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <Button button_type="submit" disabled=login_action.pending()>
                        "Log In"
                    </Button>
                </form>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4 text-center"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
                {move || {
                    unverified_token
                        .get()
                        .is_some()
                        .then_some(view! {
                            <div class="mt-4 space-y-3">
                                <Alert
                                    kind=AlertKind::Info
                                    message="Your email isn't verified yet. Check your inbox for the link, or resend it."
                                        .to_string()
                                />
                                <Button disabled=resend_action.pending() on_click=on_resend>
                                    "Resend verification"
                                </Button>
                            </div>
                        })
                }}
                {move || {
                    resend_notice
                        .get()
                        .map(|(kind, message)| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=kind message=message />
                                </div>
                            }
                        })
                }}
            </div>
        </AppShell>
    }
}

/// Runs the sequential sign-in flow against the provider and the document
/// store. The token is only persisted once every check has passed.
async fn run_sign_in(auth: AuthContext, input: LoginInput) -> Result<LoginOutcome, AppError> {
    let tokens = client::sign_in(&input.email, &input.password).await?;
    let account = client::lookup_account(&tokens.id_token).await?;

    // Unverified accounts never reach a dashboard; the token is dropped here,
    // which is the sign-out in this model.
    if !account.email_verified {
        return Ok(LoginOutcome::Unverified {
            id_token: tokens.id_token,
        });
    }

    if sessions::client::fetch_session_marker(&account.local_id, &tokens.id_token)
        .await?
        .is_some()
    {
        return Ok(LoginOutcome::ActiveSessionElsewhere);
    }

    sessions::client::create_session_marker(&account.local_id, &tokens.id_token).await?;

    let role = match users::client::fetch_user_record(&account.local_id, &tokens.id_token).await? {
        Some(record) => record.role,
        None => Role::User,
    };

    token::store_id_token(&tokens.id_token);
    auth.set_session(UserSession {
        uid: account.local_id,
        email: account.email,
        role,
        email_verified: true,
    });

    Ok(LoginOutcome::SignedIn {
        path: role.dashboard_path(),
    })
}
