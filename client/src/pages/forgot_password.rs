//! Forgot-password landing reached from the login form.

use leptos::prelude::*;
use leptos_router::components::A;
use storefront::Route;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <div class="form-container">
            <h4 class="title">"Forgot Password"</h4>
            <p>"Contact support to reset the password for your account."</p>
            <A href=Route::Login.path()>"Back to login"</A>
        </div>
    }
}
