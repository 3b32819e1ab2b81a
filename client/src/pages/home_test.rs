use super::*;
use serde_json::json;
use storefront::AuthSession;

fn signed_in(user: serde_json::Value) -> AuthState {
    AuthState { session: Some(AuthSession { user, token: "T".to_owned() }) }
}

#[test]
fn greeting_uses_user_name() {
    assert_eq!(greeting(&signed_in(json!({ "name": "John Doe" }))), "Welcome, John Doe");
}

#[test]
fn greeting_without_name_is_generic() {
    assert_eq!(greeting(&signed_in(json!({ "id": 7 }))), "Welcome back");
}

#[test]
fn greeting_for_guest() {
    assert_eq!(greeting(&AuthState::default()), "Welcome to the store");
}
