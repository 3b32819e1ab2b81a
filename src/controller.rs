//! Login form controller: credentials, one request per submit, one outcome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosted by the web `LoginPage` and the terminal `login` command. The host
//! forwards keystrokes and clicks; the controller owns the form state and
//! calls out to the injected collaborators.
//!
//! DESIGN
//! ======
//! Methods take `&self`. Credentials and phase sit in `Cell`/`RefCell` so a
//! keystroke can land while `submit` is suspended on the identity call. No
//! borrow is held across that await: the request is built from a snapshot.
//! A second `submit` while one is in flight is refused. A submit future
//! dropped before it resolves puts the phase back to `Idle`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, RefCell};

use crate::credentials::Credentials;
use crate::envelope::{AuthSession, Verdict};
use crate::identity::{IdentityClient, IdentityError};
use crate::notify::{DEFAULT_SUCCESS_MESSAGE, GENERIC_FAILURE_MESSAGE, Notifier, ToastOptions};
use crate::routes::{Navigator, Route, landing_path};
use crate::store::AuthStore;

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Resolved result of one submission.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    Succeeded(AuthSession),
    /// The service declined; carries the text that was shown.
    Rejected(String),
    TransportFailed,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a login request is already in flight")]
    InFlight,
}

pub struct LoginController<C, N, S, V> {
    client: C,
    notifier: N,
    store: S,
    navigator: V,
    credentials: RefCell<Credentials>,
    phase: Cell<LoginPhase>,
    landing: String,
}

impl<C, N, S, V> LoginController<C, N, S, V>
where
    C: IdentityClient,
    N: Notifier,
    S: AuthStore,
    V: Navigator,
{
    /// New controller with empty credentials, landing on `/` after login.
    pub fn new(client: C, notifier: N, store: S, navigator: V) -> Self {
        Self {
            client,
            notifier,
            store,
            navigator,
            credentials: RefCell::new(Credentials::default()),
            phase: Cell::new(LoginPhase::Idle),
            landing: Route::Home.path().to_owned(),
        }
    }

    /// Land on `redirect` after a successful login, if it is a safe local path.
    #[must_use]
    pub fn with_redirect(mut self, redirect: Option<&str>) -> Self {
        self.landing = landing_path(redirect);
        self
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.credentials.borrow_mut().set_email(value);
    }

    pub fn set_password(&self, value: impl Into<String>) {
        self.credentials.borrow_mut().set_password(value);
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.credentials.borrow().clone()
    }

    #[must_use]
    pub fn email(&self) -> String {
        self.credentials.borrow().email.clone()
    }

    #[must_use]
    pub fn password(&self) -> String {
        self.credentials.borrow().password.clone()
    }

    #[must_use]
    pub fn phase(&self) -> LoginPhase {
        self.phase.get()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase.get() == LoginPhase::Submitting
    }

    #[must_use]
    pub fn landing(&self) -> &str {
        &self.landing
    }

    /// Send the current credentials and report the result to the user.
    ///
    /// Exactly one notification is emitted per resolved call. On success the
    /// session is stored and the navigator moves to the landing path; on any
    /// failure the credentials are left as typed.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] without side effects if a previous
    /// submit has not resolved yet.
    pub async fn submit(&self) -> Result<LoginOutcome, SubmitError> {
        if self.is_submitting() {
            tracing::debug!("login submit ignored; request already in flight");
            return Err(SubmitError::InFlight);
        }
        self.phase.set(LoginPhase::Submitting);
        let _in_flight = InFlight { phase: &self.phase };

        let snapshot = self.credentials();
        tracing::debug!(email = %snapshot.email, "login submitted");

        let verdict = match self.client.login(&snapshot).await {
            Ok(response) => response.into_verdict(),
            Err(error) => return Ok(self.fail_transport(&error)),
        };

        let outcome = match verdict {
            Verdict::Accepted { session, message } => self.succeed(session, message),
            Verdict::Rejected(message) => {
                let text = message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned());
                tracing::info!(reason = %text, "login rejected");
                self.notifier.error(&text);
                self.phase.set(LoginPhase::Failed);
                LoginOutcome::Rejected(text)
            }
            Verdict::Malformed(field) => self.fail_transport(&IdentityError::Malformed(field)),
        };
        Ok(outcome)
    }

    /// Move to the forgot-password page. No request, no state change.
    pub fn navigate_to_forgot_password(&self) {
        self.navigator.navigate(Route::ForgotPassword.path());
    }

    fn succeed(&self, session: AuthSession, message: Option<String>) -> LoginOutcome {
        let text = message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_owned());
        self.notifier.success(&text, &ToastOptions::login_success());
        self.store.set_auth(&session);
        self.credentials.borrow_mut().set_password(String::new());
        self.phase.set(LoginPhase::Succeeded);
        tracing::info!(landing = %self.landing, "login succeeded");
        self.navigator.navigate(&self.landing);
        LoginOutcome::Succeeded(session)
    }

    fn fail_transport(&self, error: &IdentityError) -> LoginOutcome {
        tracing::warn!(error = %error, "login request failed");
        self.notifier.error(GENERIC_FAILURE_MESSAGE);
        self.phase.set(LoginPhase::Failed);
        LoginOutcome::TransportFailed
    }
}

/// Resets a phase still at `Submitting` when a submit is abandoned mid-await.
struct InFlight<'a> {
    phase: &'a Cell<LoginPhase>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.phase.get() == LoginPhase::Submitting {
            tracing::debug!("login submit dropped before completion");
            self.phase.set(LoginPhase::Idle);
        }
    }
}
