//! Login page: email + password form driven by `LoginController`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page only wires DOM events to the controller. Toasts, session storage,
//! and navigation happen through the collaborators built here from context.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use storefront::LoginController;

use crate::net::api::GlooIdentityClient;
use crate::state::auth::{AuthState, BrowserAuthStore};
use crate::state::toast::{ToastNotifier, ToastQueue};
use crate::util::navigation::{RouterNavigator, redirect_param};

pub const LOGIN_HEADING: &str = "LOGIN FORM";
pub const EMAIL_PLACEHOLDER: &str = "Enter Your Email";
pub const PASSWORD_PLACEHOLDER: &str = "Enter Your Password";
pub const FORGOT_PASSWORD_LABEL: &str = "Forgot Password";
pub const SUBMIT_LABEL: &str = "LOGIN";

/// Bump a revision counter so reads of controller state re-render.
fn bump(rev: &mut u64) {
    *rev = rev.wrapping_add(1);
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let redirect = redirect_param(use_query_map().get_untracked().get("redirect"));

    let controller = LoginController::new(
        GlooIdentityClient::default(),
        ToastNotifier::new(toasts),
        BrowserAuthStore::new(auth),
        RouterNavigator::new(use_navigate()),
    )
    .with_redirect(redirect.as_deref());
    let controller = StoredValue::new_local(Rc::new(controller));

    let form_rev = RwSignal::new(0_u64);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let ctrl = controller.get_value();
        leptos::task::spawn_local(async move {
            // A refused double submit needs no feedback; the button is disabled.
            let _ = ctrl.submit().await;
            let _ = busy.try_set(false);
            let _ = form_rev.try_update(bump);
        });
    };

    view! {
        <div class="form-container">
            <form class="login-form" on:submit=on_submit>
                <h4 class="title">{LOGIN_HEADING}</h4>
                <div class="mb-3">
                    <input
                        class="form-control"
                        type="email"
                        id="login-email"
                        placeholder=EMAIL_PLACEHOLDER
                        required=true
                        autofocus=true
                        prop:value=move || {
                            form_rev.track();
                            controller.with_value(|c| c.email())
                        }
                        on:input=move |ev| {
                            controller.with_value(|c| c.set_email(event_target_value(&ev)));
                            form_rev.update(bump);
                        }
                    />
                </div>
                <div class="mb-3">
                    <input
                        class="form-control"
                        type="password"
                        id="login-password"
                        placeholder=PASSWORD_PLACEHOLDER
                        required=true
                        prop:value=move || {
                            form_rev.track();
                            controller.with_value(|c| c.password())
                        }
                        on:input=move |ev| {
                            controller.with_value(|c| c.set_password(event_target_value(&ev)));
                            form_rev.update(bump);
                        }
                    />
                </div>
                <div class="mb-3">
                    <button
                        type="button"
                        class="btn forgot-btn"
                        on:click=move |_| controller.with_value(|c| c.navigate_to_forgot_password())
                    >
                        {FORGOT_PASSWORD_LABEL}
                    </button>
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    {SUBMIT_LABEL}
                </button>
            </form>
        </div>
    }
}
