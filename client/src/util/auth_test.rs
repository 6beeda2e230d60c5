use super::*;
use crate::identity::AuthUser;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false, ..AuthState::default() };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true, ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(AuthUser {
            uid: "u1".to_owned(),
            email: Some("alice@example.com".to_owned()),
            display_name: Some("Alice".to_owned()),
            photo_url: None,
            email_verified: false,
            provider_id: "password".to_owned(),
        }),
        loading: false,
        ..AuthState::default()
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn validate_credentials_trims_email_only() {
    assert_eq!(
        validate_credentials("  a@b.com ", " pw "),
        Ok(("a@b.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter both email and password."));
}
