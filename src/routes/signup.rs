//! Signup route. It validates inputs locally, creates the account, asks the
//! provider to send the verification email, and writes the profile document
//! with the default role. The form never offers a role choice.

use crate::app_lib::{self, AppError};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, errors};
use crate::features::users::{self, types::UserRecord};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

/// Minimum password length enforced by the client for early UX feedback; the
/// provider enforces the same floor server-side.
const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone)]
/// Captures signup form input for the async action without borrowing signals.
struct SignupInput {
    email: String,
    password: String,
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal(false);

    let signup_action = Action::new_local(move |input: &SignupInput| {
        let input = input.clone();
        async move { run_sign_up(input).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(()) => set_success.set(true),
                Err(err) => {
                    leptos::logging::error!("signup failed: {err}");
                    set_error.set(Some(errors::classify(&err).signup_message().to_string()));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_success.set(false);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();

        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }
        if !email_value.contains('@') {
            set_error.set(Some("Email address looks invalid.".to_string()));
            return;
        }
        if password_value.len() < MIN_PASSWORD_LENGTH {
            set_error.set(Some(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters."
            )));
            return;
        }

        signup_action.dispatch(SignupInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <div class="mx-auto max-w-sm">
                <h1 class="mb-4 text-center text-2xl font-bold">"Signup"</h1>
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
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <Button button_type="submit" disabled=signup_action.pending()>
                        "Signup"
                    </Button>
                </form>
                {move || {
                    signup_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4 text-center"><Spinner /></div> })
                }}
                {move || {
                    success
                        .get()
                        .then_some(view! {
                            <div class="mt-4 space-y-3">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Signup successful! Check your email to verify your account."
                                        .to_string()
                                />
                                <A
                                    href="/login"
                                    {..}
                                    class="block text-center font-mono text-sm text-green-400 hover:text-green-300"
                                >
                                    "Proceed to sign in →"
                                </A>
                            </div>
                        })
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
            </div>
        </AppShell>
    }
}

/// Creates the account, requests the verification email, and writes the
/// profile document. The profile always starts with the default role.
async fn run_sign_up(input: SignupInput) -> Result<(), AppError> {
    let tokens = client::sign_up(&input.email, &input.password).await?;
    client::send_verification_email(&tokens.id_token).await?;

    let record = UserRecord::new(&tokens.email, app_lib::now_millis());
    users::client::create_user_record(&tokens.local_id, &tokens.id_token, &record).await
}
