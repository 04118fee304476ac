use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-6 w-6 animate-spin rounded-full border-2 border-t-white border-r-transparent border-b-transparent border-l-transparent"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
