//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the login flow through [`BrowserAuthStore`] and read by pages
//! that render identity-dependent content.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use storefront::{AuthSession, AuthStore};

use crate::util::ui_persistence;

/// localStorage key holding the serialized session.
pub const AUTH_STORAGE_KEY: &str = "auth";

/// Authentication state for the current browser user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
}

impl AuthState {
    /// State seeded from the session persisted by a previous login, if any.
    #[must_use]
    pub fn restore() -> Self {
        Self { session: ui_persistence::load_json(AUTH_STORAGE_KEY) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.session.as_ref().and_then(AuthSession::user_name)
    }
}

/// [`AuthStore`] that updates the auth context and mirrors it to localStorage.
#[derive(Clone, Copy)]
pub struct BrowserAuthStore {
    auth: RwSignal<AuthState>,
}

impl BrowserAuthStore {
    pub fn new(auth: RwSignal<AuthState>) -> Self {
        Self { auth }
    }
}

impl AuthStore for BrowserAuthStore {
    fn set_auth(&self, session: &AuthSession) {
        self.auth.update(|state| state.session = Some(session.clone()));
        ui_persistence::save_json(AUTH_STORAGE_KEY, session);
    }
}
