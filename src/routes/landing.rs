//! Public landing page with the two entry points into the app.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex min-h-[60vh] flex-col items-center justify-center text-center">
                <h1 class="mb-6 text-3xl font-bold">"Welcome to Treasure Hunt"</h1>
                <p class="mb-8 text-lg text-gray-300">
                    "Scan QR codes, earn points, and compete!"
                </p>

                <div class="flex space-x-4">
                    <A
                        href="/login"
                        {..}
                        class="bg-white px-6 py-3 font-mono font-bold text-black transition-colors hover:bg-gray-300"
                    >
                        "Sign In"
                    </A>
                    <A
                        href="/signup"
                        {..}
                        class="bg-gray-800 px-6 py-3 font-mono font-bold text-white transition-colors hover:bg-gray-700"
                    >
                        "Sign Up"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
