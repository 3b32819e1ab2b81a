//! Response envelope returned by the identity service.
//!
//! DESIGN
//! ======
//! The envelope separates application-level rejection (`success: false`) from
//! transport-level failure. Only a well-formed envelope reaches
//! [`AuthResponse::into_verdict`]; anything else is an `IdentityError`.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a login response: `{ success, user?, token?, message? }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Authenticated identity written to the auth-state store after a login.
///
/// `user` is opaque to the login flow and kept as raw JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: Value,
    pub token: String,
}

impl AuthSession {
    /// Display name of the user, when the server record carries one.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user.get("name").and_then(Value::as_str)
    }
}

/// How the login flow should treat a decoded envelope.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Login accepted; `message` is the server text, if any.
    Accepted { session: AuthSession, message: Option<String> },
    /// Server declined the credentials; carries the server text, if any.
    Rejected(Option<String>),
    /// `success: true` without the fields a session needs.
    Malformed(&'static str),
}

impl AuthResponse {
    #[must_use]
    pub fn accepted(user: Value, token: impl Into<String>) -> Self {
        Self { success: true, user: Some(user), token: Some(token.into()), message: None }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, user: None, token: None, message: Some(message.into()) }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Classify the envelope.
    #[must_use]
    pub fn into_verdict(self) -> Verdict {
        let message = self.message.filter(|m| !m.trim().is_empty());
        if !self.success {
            return Verdict::Rejected(message);
        }
        let Some(user) = self.user.filter(|u| !u.is_null()) else {
            return Verdict::Malformed("user");
        };
        let Some(token) = self.token.filter(|t| !t.is_empty()) else {
            return Verdict::Malformed("token");
        };
        Verdict::Accepted { session: AuthSession { user, token }, message }
    }
}
