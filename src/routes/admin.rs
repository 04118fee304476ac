//! Dashboard for hunt organizers. Reachable only with the admin role.

use crate::components::AppShell;
use crate::features::auth::{state::use_auth, RequireRole};
use crate::features::users::types::Role;
use leptos::prelude::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <RequireRole role=Role::Admin children=move || view! {
                <div class="flex min-h-[50vh] flex-col items-center justify-center text-center">
                    <h1 class="text-2xl font-bold">"Admin Dashboard"</h1>
                    <p class="mt-2 text-gray-400">
                        "Manage checkpoints, clues, and the leaderboard."
                    </p>
                    {move || {
                        auth.session
                            .get()
                            .map(|session| {
                                view! {
                                    <p class="mt-6 font-mono text-xs text-gray-500">
                                        {format!("signed in as {} [{}]", session.email, session.role.as_str())}
                                    </p>
                                }
                            })
                    }}
                </div>
            } />
        </AppShell>
    }
}
