use super::*;
use crate::envelope::AuthResponse;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// =========================================================================
// Fakes
// =========================================================================

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Request(Credentials),
    Success(String, ToastOptions),
    Error(String),
    SetAuth(AuthSession),
    Navigate(String),
}

type Log = Arc<Mutex<Vec<Event>>>;

struct FakeIdentity {
    log: Log,
    responses: Mutex<VecDeque<Result<AuthResponse, IdentityError>>>,
    gate: Option<Arc<Notify>>,
}

#[async_trait::async_trait(?Send)]
impl IdentityClient for FakeIdentity {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, IdentityError> {
        self.log.lock().unwrap().push(Event::Request(credentials.clone()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(IdentityError::Request("no scripted response".into())))
    }
}

struct FakeNotifier {
    log: Log,
}

impl Notifier for FakeNotifier {
    fn success(&self, message: &str, options: &ToastOptions) {
        self.log.lock().unwrap().push(Event::Success(message.to_owned(), options.clone()));
    }

    fn error(&self, message: &str) {
        self.log.lock().unwrap().push(Event::Error(message.to_owned()));
    }
}

struct FakeStore {
    log: Log,
}

impl AuthStore for FakeStore {
    fn set_auth(&self, session: &AuthSession) {
        self.log.lock().unwrap().push(Event::SetAuth(session.clone()));
    }
}

struct FakeNavigator {
    log: Log,
}

impl Navigator for FakeNavigator {
    fn navigate(&self, path: &str) {
        self.log.lock().unwrap().push(Event::Navigate(path.to_owned()));
    }
}

type TestController = LoginController<FakeIdentity, FakeNotifier, FakeStore, FakeNavigator>;

fn controller_with(
    responses: Vec<Result<AuthResponse, IdentityError>>,
    gate: Option<Arc<Notify>>,
) -> (TestController, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let identity = FakeIdentity { log: log.clone(), responses: Mutex::new(responses.into()), gate };
    let controller = LoginController::new(
        identity,
        FakeNotifier { log: log.clone() },
        FakeStore { log: log.clone() },
        FakeNavigator { log: log.clone() },
    );
    (controller, log)
}

fn events(log: &Log) -> Vec<Event> {
    log.lock().unwrap().clone()
}

fn john() -> serde_json::Value {
    json!({ "id": 1, "name": "John Doe", "email": "test@example.com" })
}

fn john_session() -> AuthSession {
    AuthSession { user: john(), token: "mockToken".to_owned() }
}

fn typed(controller: &TestController, email: &str, password: &str) {
    controller.set_email(email);
    controller.set_password(password);
}

// =========================================================================
// Form state
// =========================================================================

#[test]
fn inputs_start_empty_and_idle() {
    let (ctrl, log) = controller_with(vec![], None);
    assert_eq!(ctrl.email(), "");
    assert_eq!(ctrl.password(), "");
    assert_eq!(ctrl.phase(), LoginPhase::Idle);
    assert!(events(&log).is_empty());
}

#[test]
fn typing_echoes_values_without_side_effects() {
    let (ctrl, log) = controller_with(vec![], None);
    typed(&ctrl, "test@example.com", "password123");
    assert_eq!(ctrl.credentials(), Credentials::new("test@example.com", "password123"));
    assert_eq!(ctrl.phase(), LoginPhase::Idle);
    assert!(events(&log).is_empty());
}

// =========================================================================
// submit: success
// =========================================================================

#[tokio::test]
async fn successful_login_notifies_stores_and_navigates_in_order() {
    let (ctrl, log) = controller_with(vec![Ok(AuthResponse::accepted(john(), "mockToken"))], None);
    typed(&ctrl, "test@example.com", "password123");

    let outcome = ctrl.submit().await.unwrap();

    assert_eq!(outcome, LoginOutcome::Succeeded(john_session()));
    assert_eq!(ctrl.phase(), LoginPhase::Succeeded);
    assert_eq!(
        events(&log),
        vec![
            Event::Request(Credentials::new("test@example.com", "password123")),
            Event::Success("Login successful".to_owned(), ToastOptions::login_success()),
            Event::SetAuth(john_session()),
            Event::Navigate("/".to_owned()),
        ]
    );
}

#[tokio::test]
async fn successful_login_shows_server_message_when_present() {
    let response = AuthResponse::accepted(john(), "mockToken").with_message("Welcome back!");
    let (ctrl, log) = controller_with(vec![Ok(response)], None);

    ctrl.submit().await.unwrap();

    let successes: Vec<_> = events(&log)
        .into_iter()
        .filter_map(|e| match e {
            Event::Success(msg, _) => Some(msg),
            _ => None,
        })
        .collect();
    assert_eq!(successes, vec!["Welcome back!".to_owned()]);
}

#[tokio::test]
async fn successful_login_clears_password_but_keeps_email() {
    let (ctrl, _log) = controller_with(vec![Ok(AuthResponse::accepted(john(), "mockToken"))], None);
    typed(&ctrl, "test@example.com", "password123");

    ctrl.submit().await.unwrap();

    assert_eq!(ctrl.email(), "test@example.com");
    assert_eq!(ctrl.password(), "");
}

#[tokio::test]
async fn successful_login_lands_on_requested_redirect() {
    let (ctrl, log) = controller_with(vec![Ok(AuthResponse::accepted(john(), "T"))], None);
    let ctrl = ctrl.with_redirect(Some("/cart"));

    ctrl.submit().await.unwrap();

    assert_eq!(events(&log).last(), Some(&Event::Navigate("/cart".to_owned())));
}

#[tokio::test]
async fn offsite_redirect_falls_back_to_home() {
    let (ctrl, log) = controller_with(vec![Ok(AuthResponse::accepted(john(), "T"))], None);
    let ctrl = ctrl.with_redirect(Some("https://evil.example/steal"));
    assert_eq!(ctrl.landing(), "/");

    ctrl.submit().await.unwrap();

    assert_eq!(events(&log).last(), Some(&Event::Navigate("/".to_owned())));
}

// =========================================================================
// submit: failures
// =========================================================================

#[tokio::test]
async fn transport_failure_shows_generic_message_only() {
    let (ctrl, log) = controller_with(vec![Err(IdentityError::Request("Invalid credentials".into()))], None);
    typed(&ctrl, "test@example.com", "password123");

    let outcome = ctrl.submit().await.unwrap();

    assert_eq!(outcome, LoginOutcome::TransportFailed);
    assert_eq!(ctrl.phase(), LoginPhase::Failed);
    assert_eq!(
        events(&log),
        vec![
            Event::Request(Credentials::new("test@example.com", "password123")),
            Event::Error("Something went wrong".to_owned()),
        ]
    );
}

#[tokio::test]
async fn http_status_failure_is_generic_too() {
    let (ctrl, log) = controller_with(vec![Err(IdentityError::Status { status: 500 })], None);

    ctrl.submit().await.unwrap();

    assert_eq!(events(&log).last(), Some(&Event::Error(GENERIC_FAILURE_MESSAGE.to_owned())));
}

#[tokio::test]
async fn rejection_shows_server_message_verbatim() {
    let (ctrl, log) = controller_with(vec![Ok(AuthResponse::rejected("Invalid Credentials"))], None);
    typed(&ctrl, "test@example.com", "wrongpassword");

    let outcome = ctrl.submit().await.unwrap();

    assert_eq!(outcome, LoginOutcome::Rejected("Invalid Credentials".to_owned()));
    assert_eq!(ctrl.phase(), LoginPhase::Failed);
    assert_eq!(
        events(&log),
        vec![
            Event::Request(Credentials::new("test@example.com", "wrongpassword")),
            Event::Error("Invalid Credentials".to_owned()),
        ]
    );
}

#[tokio::test]
async fn rejection_without_message_falls_back_to_generic() {
    let response = AuthResponse { success: false, user: None, token: None, message: None };
    let (ctrl, log) = controller_with(vec![Ok(response)], None);

    let outcome = ctrl.submit().await.unwrap();

    assert_eq!(outcome, LoginOutcome::Rejected(GENERIC_FAILURE_MESSAGE.to_owned()));
    assert_eq!(events(&log).last(), Some(&Event::Error(GENERIC_FAILURE_MESSAGE.to_owned())));
}

#[tokio::test]
async fn success_without_token_is_treated_as_transport_failure() {
    let response = AuthResponse { success: true, user: Some(john()), token: None, message: None };
    let (ctrl, log) = controller_with(vec![Ok(response)], None);

    let outcome = ctrl.submit().await.unwrap();

    assert_eq!(outcome, LoginOutcome::TransportFailed);
    let log = events(&log);
    assert!(!log.iter().any(|e| matches!(e, Event::SetAuth(_) | Event::Navigate(_))));
    assert_eq!(log.last(), Some(&Event::Error(GENERIC_FAILURE_MESSAGE.to_owned())));
}

#[tokio::test]
async fn failed_attempt_keeps_credentials_for_retry() {
    let (ctrl, log) = controller_with(
        vec![Ok(AuthResponse::rejected("Invalid Credentials")), Ok(AuthResponse::accepted(john(), "mockToken"))],
        None,
    );
    typed(&ctrl, "test@example.com", "wrongpassword");

    ctrl.submit().await.unwrap();
    assert_eq!(ctrl.credentials(), Credentials::new("test@example.com", "wrongpassword"));

    // Only the wrong field is retyped.
    ctrl.set_password("password123");
    let outcome = ctrl.submit().await.unwrap();

    assert_eq!(outcome, LoginOutcome::Succeeded(john_session()));
    let requests: Vec<_> = events(&log)
        .into_iter()
        .filter_map(|e| match e {
            Event::Request(creds) => Some(creds),
            _ => None,
        })
        .collect();
    assert_eq!(
        requests,
        vec![
            Credentials::new("test@example.com", "wrongpassword"),
            Credentials::new("test@example.com", "password123"),
        ]
    );
}

#[tokio::test]
async fn empty_credentials_are_still_submitted() {
    let (ctrl, log) = controller_with(vec![Ok(AuthResponse::rejected("Email is required"))], None);

    ctrl.submit().await.unwrap();

    assert_eq!(events(&log).first(), Some(&Event::Request(Credentials::default())));
}

#[tokio::test]
async fn every_submit_emits_exactly_one_notification() {
    let (ctrl, log) = controller_with(
        vec![
            Err(IdentityError::Decode("bad json".into())),
            Ok(AuthResponse::rejected("Invalid Credentials")),
            Ok(AuthResponse::accepted(john(), "T")),
        ],
        None,
    );

    for _ in 0..3 {
        ctrl.submit().await.unwrap();
    }

    let notifications = events(&log)
        .iter()
        .filter(|e| matches!(e, Event::Success(..) | Event::Error(_)))
        .count();
    assert_eq!(notifications, 3);
}

// =========================================================================
// submit: concurrency
// =========================================================================

#[tokio::test]
async fn second_submit_while_in_flight_is_refused() {
    let gate = Arc::new(Notify::new());
    let (ctrl, log) = controller_with(vec![Ok(AuthResponse::accepted(john(), "mockToken"))], Some(gate.clone()));
    typed(&ctrl, "test@example.com", "password123");

    let (first, second, ()) = tokio::join!(ctrl.submit(), ctrl.submit(), async {
        assert!(ctrl.is_submitting());
        gate.notify_one();
    });

    assert_eq!(first, Ok(LoginOutcome::Succeeded(john_session())));
    assert_eq!(second, Err(SubmitError::InFlight));
    let requests = events(&log).iter().filter(|e| matches!(e, Event::Request(_))).count();
    let notifications = events(&log)
        .iter()
        .filter(|e| matches!(e, Event::Success(..) | Event::Error(_)))
        .count();
    assert_eq!(requests, 1);
    assert_eq!(notifications, 1);
}

#[tokio::test]
async fn typing_during_in_flight_request_does_not_change_sent_snapshot() {
    let gate = Arc::new(Notify::new());
    let (ctrl, log) = controller_with(vec![Ok(AuthResponse::rejected("Invalid Credentials"))], Some(gate.clone()));
    typed(&ctrl, "test@example.com", "wrongpassword");

    let (outcome, ()) = tokio::join!(ctrl.submit(), async {
        ctrl.set_password("password123");
        gate.notify_one();
    });

    assert_eq!(outcome, Ok(LoginOutcome::Rejected("Invalid Credentials".to_owned())));
    assert_eq!(events(&log).first(), Some(&Event::Request(Credentials::new("test@example.com", "wrongpassword"))));
    assert_eq!(ctrl.password(), "password123");
}

#[tokio::test]
async fn abandoned_submit_leaves_form_retryable() {
    let gate = Arc::new(Notify::new());
    let (ctrl, log) = controller_with(
        vec![Ok(AuthResponse::accepted(john(), "mockToken"))],
        Some(gate.clone()),
    );
    typed(&ctrl, "test@example.com", "password123");

    {
        let mut pending = Box::pin(ctrl.submit());
        tokio::select! {
            biased;
            _ = &mut pending => panic!("submit resolved while the request was gated"),
            () = std::future::ready(()) => {}
        }
        assert!(ctrl.is_submitting());
    }

    assert_eq!(ctrl.phase(), LoginPhase::Idle);
    assert_eq!(ctrl.credentials(), Credentials::new("test@example.com", "password123"));
    assert!(!events(&log).iter().any(|e| matches!(e, Event::Success(..) | Event::Error(_))));

    gate.notify_one();
    assert_eq!(ctrl.submit().await, Ok(LoginOutcome::Succeeded(john_session())));
}

// =========================================================================
// Logging
// =========================================================================

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn email_is_not_logged_at_info() {
    let captured = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let (ctrl, _log) = controller_with(
        vec![Ok(AuthResponse::rejected("Invalid Credentials")), Ok(AuthResponse::accepted(john(), "mockToken"))],
        None,
    );
    typed(&ctrl, "test@example.com", "password123");
    ctrl.submit().await.unwrap();
    ctrl.submit().await.unwrap();

    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("login rejected"));
    assert!(logs.contains("login succeeded"));
    assert!(!logs.contains("test@example.com"));
}

// =========================================================================
// Forgot password
// =========================================================================

#[test]
fn forgot_password_navigates_without_request() {
    let (ctrl, log) = controller_with(vec![], None);
    typed(&ctrl, "test@example.com", "pw");

    ctrl.navigate_to_forgot_password();

    assert_eq!(events(&log), vec![Event::Navigate("/forgot-password".to_owned())]);
    assert_eq!(ctrl.phase(), LoginPhase::Idle);
    assert_eq!(ctrl.email(), "test@example.com");
}
