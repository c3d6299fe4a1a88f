use super::*;
use crate::net::types::AuthUser;

fn user() -> AuthUser {
    AuthUser {
        id: "u1".to_owned(),
        full_name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        profile_pic: None,
        is_onboarded: true,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn no_redirects_while_loading() {
    let anonymous = AuthState { user: None, loading: true };
    let signed_in = AuthState { user: Some(user()), loading: true };
    assert!(!should_redirect_unauth(&anonymous));
    assert!(!should_redirect_authed(&signed_in));
}

#[test]
fn should_redirect_authed_when_user_exists() {
    let state = AuthState { user: Some(user()), loading: false };
    assert!(should_redirect_authed(&state));
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn route_paths_are_distinct() {
    assert_ne!(LOGIN_PATH, SIGNUP_PATH);
    assert_eq!(HOME_PATH, "/");
}
