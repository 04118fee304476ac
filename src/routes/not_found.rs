//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[50vh] flex-col items-center justify-center px-4 text-center">
                <h1 class="select-none font-mono text-8xl font-black text-gray-800">"404"</h1>
                <p class="mt-2 text-xl font-bold">"Page not found"</p>
                <p class="mx-auto mt-4 max-w-sm text-gray-400">
                    "The trail went cold. The page you requested does not exist."
                </p>
                <A
                    href="/"
                    {..}
                    class="mt-8 bg-white px-6 py-3 font-mono font-bold text-black transition-colors hover:bg-gray-300"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}
