//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage};
use crate::state::{auth::AuthState, toast::ToastQueue};

/// Root application component.
///
/// Provides the auth and toast contexts, restores any stored session, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restore());
    let toasts = RwSignal::new(ToastQueue::default());

    provide_context(auth);
    provide_context(toasts);

    view! {
        <Title text="Storefront"/>

        <Router>
            <Toaster/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
