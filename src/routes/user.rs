//! Dashboard for hunt participants. Reachable only with the user role.

use crate::components::AppShell;
use crate::features::auth::{state::use_auth, RequireRole};
use crate::features::users::types::Role;
use leptos::prelude::*;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <RequireRole role=Role::User children=move || view! {
                <div class="flex min-h-[50vh] flex-col items-center justify-center text-center">
                    <h1 class="text-2xl font-bold">"User Dashboard"</h1>
                    <p class="mt-2 text-gray-400">
                        "Scan QR codes at each checkpoint to earn points."
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
