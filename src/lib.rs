//! # storefront
//!
//! Framework-agnostic core of the storefront login flow.
//!
//! The [`controller::LoginController`] owns the credentials typed into a login
//! form, performs one authentication request per submit, and turns the result
//! into exactly one user-facing notification. Everything it talks to (the
//! identity service, the notification sink, the auth-state store, and the
//! router) is injected through the traits in [`identity`], [`notify`],
//! [`store`], and [`routes`], so the same controller drives both the Leptos
//! `client` and the terminal `cli`.

pub mod config;
pub mod controller;
pub mod credentials;
pub mod envelope;
#[cfg(feature = "http")]
pub mod http;
pub mod identity;
pub mod notify;
pub mod routes;
pub mod store;

pub use controller::{LoginController, LoginOutcome, LoginPhase, SubmitError};
pub use credentials::Credentials;
pub use envelope::{AuthResponse, AuthSession};
pub use identity::{IdentityClient, IdentityError};
pub use notify::{GENERIC_FAILURE_MESSAGE, Notifier, ToastOptions, ToastStyle};
pub use routes::{Navigator, Route};
pub use store::AuthStore;
