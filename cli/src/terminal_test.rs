use super::*;
use serde_json::json;
use storefront::config::Timeouts;

fn session() -> AuthSession {
    AuthSession { user: json!({ "id": 1, "name": "John Doe" }), token: "mockToken".to_owned() }
}

// =============================================================================
// Notification formatting
// =============================================================================

#[test]
fn success_line_uses_configured_icon() {
    assert_eq!(format_success("Login successful", &ToastOptions::login_success()), "🙏 Login successful");
}

#[test]
fn success_line_without_icon_uses_check_mark() {
    assert_eq!(format_success("Done", &ToastOptions::default()), "✔ Done");
}

#[test]
fn error_line_is_prefixed() {
    assert_eq!(format_error("Something went wrong"), "✖ Something went wrong");
}

// =============================================================================
// TerminalNavigator
// =============================================================================

#[test]
fn navigator_records_full_url() {
    let config = ClientConfig::new("http://127.0.0.1:8080/", "/api/v1/auth/login", Timeouts::default()).unwrap();
    let nav = TerminalNavigator::new(&config);
    assert_eq!(nav.last_visited(), None);
    nav.navigate("/forgot-password");
    assert_eq!(nav.last_visited().as_deref(), Some("http://127.0.0.1:8080/forgot-password"));
}

// =============================================================================
// FileAuthStore
// =============================================================================

#[test]
fn load_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileAuthStore::new(dir.path().join("session.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn set_auth_then_load_returns_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileAuthStore::new(dir.path().join("session.json"));

    store.set_auth(&session());

    assert_eq!(store.load().unwrap(), Some(session()));
}

#[test]
fn set_auth_replaces_previous_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileAuthStore::new(dir.path().join("session.json"));
    store.set_auth(&AuthSession { user: json!({ "id": 2 }), token: "old".to_owned() });

    store.set_auth(&session());

    assert_eq!(store.load().unwrap().map(|s| s.token), Some("mockToken".to_owned()));
}

#[test]
fn load_corrupt_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let err = FileAuthStore::new(&path).load().unwrap_err();
    assert!(matches!(err, SessionFileError::Json { .. }));
}

#[test]
fn set_auth_into_missing_directory_does_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileAuthStore::new(dir.path().join("missing").join("session.json"));

    store.set_auth(&session());

    assert!(store.load().unwrap().is_none());
}
