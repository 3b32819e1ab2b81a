//! Authenticated landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;
use storefront::Route;

use crate::state::auth::AuthState;

/// Heading text for the landing page given the current auth state.
pub(crate) fn greeting(state: &AuthState) -> String {
    match (state.is_authenticated(), state.user_name()) {
        (true, Some(name)) => format!("Welcome, {name}"),
        (true, None) => "Welcome back".to_owned(),
        (false, _) => "Welcome to the store".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <h1>{move || auth.with(greeting)}</h1>
            <Show when=move || !auth.with(AuthState::is_authenticated)>
                <A href=Route::Login.path()>"Log in"</A>
            </Show>
        </div>
    }
}
