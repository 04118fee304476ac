mod admin;
mod landing;
mod login;
mod not_found;
mod signup;
mod user;
mod verify_email;

pub(crate) use admin::AdminDashboardPage;
pub(crate) use landing::LandingPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use signup::SignUpPage;
pub(crate) use user::UserDashboardPage;
pub(crate) use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/admin") view=AdminDashboardPage />
            <Route path=path!("/user") view=UserDashboardPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
