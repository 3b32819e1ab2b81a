//! Login form input state.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email and password as typed into the login form.
///
/// Both fields are always defined; an empty string means "nothing typed yet"
/// and is still sent as-is when the form is submitted.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }
}

// Manual impl so the password never ends up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
