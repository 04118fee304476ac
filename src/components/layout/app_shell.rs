//! Shared layout wrapper with navigation and content container. It centralizes
//! the header, the sign-out control, and the auth error toast so routes can
//! focus on content. Navigation remains client-side; the backend's security
//! rules must enforce access control.

use crate::app_lib::GIT_COMMIT;
use crate::components::{Alert, AlertKind};
use crate::features::auth::{client, state::use_auth};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    view! {
        <div class="flex min-h-screen flex-col bg-black text-white">
            <header class="border-b border-gray-800">
                <div class="mx-auto flex max-w-screen-xl flex-wrap items-center justify-between p-4">
                    <A
                        href="/"
                        {..}
                        class="font-mono text-sm font-bold tracking-widest text-green-400"
                    >
                        "TREASURE.HUNT"
                    </A>
                    <nav class="flex items-center gap-4 font-mono text-sm">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <A
                                        href="/login"
                                        {..}
                                        class="px-3 py-2 text-gray-300 transition-colors hover:text-white"
                                    >
                                        "Sign In"
                                    </A>
                                    <A
                                        href="/signup"
                                        {..}
                                        class="bg-gray-800 px-3 py-2 text-white transition-colors hover:bg-gray-700"
                                    >
                                        "Sign Up"
                                    </A>
                                }
                            }
                        >
                            <SignOutButton />
                        </Show>
                    </nav>
                </div>
                {move || {
                    auth.error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mx-auto max-w-screen-xl px-4 pb-3">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </header>
            <main class="flex-1">
                <div class="container mx-auto mt-6 p-4">{children()}</div>
            </main>
            <footer class="border-t border-gray-800 p-4 text-center font-mono text-xs text-gray-600">
                {format!("$ treasure-hunt rev {GIT_COMMIT}_")}
            </footer>
        </div>
    }
}

/// Ends the session and returns home. Failures surface through the shared auth
/// error toast and leave the session signed in so the user can retry.
#[component]
fn SignOutButton() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_click = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if client::sign_out(&auth).await {
                navigate("/", Default::default());
            }
        });
    };

    view! {
        <button
            type="button"
            class="bg-gray-800 px-4 py-2 text-sm text-white transition-colors hover:bg-gray-700"
            on:click=on_click
        >
            "LOGOUT"
        </button>
    }
}
