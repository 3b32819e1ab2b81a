//! # client
//!
//! Leptos + WASM storefront frontend: login, forgot-password, and landing
//! pages plus toast notifications.
//!
//! The login form is driven by `storefront::LoginController`; this crate
//! supplies its browser-side collaborators (gloo-net identity client,
//! localStorage-backed auth store, toast notifier, router navigator).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
