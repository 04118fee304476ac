use crate::components::Spinner;
use crate::features::auth::state::use_auth;
use crate::features::users::types::Role;
use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};

/// Gates a dashboard behind a role. While the session is still hydrating a
/// spinner is shown; once loading clears, visitors without a session or with
/// the other role are bounced to the landing page.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let allowed = Signal::derive(move || {
        auth.session
            .get()
            .is_some_and(|session| session.role == role)
    });

    Effect::new(move |_| {
        if !auth.loading.get() && !allowed.get() {
            // UX-only guard; the backend's security rules are the real gate.
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || !auth.loading.get() && allowed.get()
            fallback=|| view! { <div class="mt-16 flex justify-center"><Spinner /></div> }
        >
            {children()}
        </Show>
    }
}
