//! Notification sink seam and toast presentation options.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Text shown for every transport-level login failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Text shown on a successful login when the server sends no message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Login successful";

pub const LOGIN_SUCCESS_DURATION_MS: u64 = 5000;
pub const ERROR_TOAST_DURATION_MS: u64 = 4000;

/// Colors applied to a toast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastStyle {
    pub background: String,
    pub color: String,
}

/// Presentation options passed along with a success notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastOptions {
    pub duration: Duration,
    pub icon: Option<String>,
    pub style: Option<ToastStyle>,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self { duration: Duration::from_millis(ERROR_TOAST_DURATION_MS), icon: None, style: None }
    }
}

impl ToastOptions {
    /// Options used for the login success toast: 5s, 🙏, white on green.
    #[must_use]
    pub fn login_success() -> Self {
        Self {
            duration: Duration::from_millis(LOGIN_SUCCESS_DURATION_MS),
            icon: Some("🙏".to_owned()),
            style: Some(ToastStyle { background: "green".to_owned(), color: "white".to_owned() }),
        }
    }

    /// Inline CSS for the style block, empty when no style is set.
    #[must_use]
    pub fn css(&self) -> String {
        self.style
            .as_ref()
            .map(|s| format!("background: {}; color: {};", s.background, s.color))
            .unwrap_or_default()
    }
}

/// Surfaces transient success and error messages to the user.
///
/// Fire-and-forget: nothing is returned to the caller.
pub trait Notifier {
    fn success(&self, message: &str, options: &ToastOptions);
    fn error(&self, message: &str);
}
