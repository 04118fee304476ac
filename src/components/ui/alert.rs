//! Alert banners for success and error messages. Messages must be safe to
//! render and should never include tokens or raw provider bodies.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "border-l-2 border-red-400 bg-gray-900 px-4 py-3 font-mono text-sm text-red-400"
        }
        AlertKind::Success => {
            "border-l-2 border-green-400 bg-gray-900 px-4 py-3 font-mono text-sm text-green-400"
        }
        AlertKind::Info => {
            "border-l-2 border-blue-400 bg-gray-900 px-4 py-3 font-mono text-sm text-blue-300"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
