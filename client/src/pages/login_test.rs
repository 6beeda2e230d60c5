use super::*;
use crate::identity::AuthUser;

fn credential(is_new_user: bool) -> UserCredential {
    UserCredential {
        user: AuthUser {
            uid: "u1".to_owned(),
            email: Some("ada@example.com".to_owned()),
            display_name: Some("Ada".to_owned()),
            photo_url: None,
            email_verified: false,
            provider_id: "password".to_owned(),
        },
        is_new_user,
    }
}

#[test]
fn welcome_message_greets_new_users() {
    assert_eq!(welcome_message(&credential(true)), "Welcome, Ada!");
}

#[test]
fn welcome_message_greets_returning_users() {
    assert_eq!(welcome_message(&credential(false)), "Welcome back, Ada!");
}

#[cfg(not(feature = "hydrate"))]
mod reporting {
    use super::*;
    use crate::identity::Identity;
    use crate::identity::memory::MemoryIdentity;
    use crate::state::toast::ToastKind;

    #[test]
    fn failed_sign_in_lowers_loading_and_raises_error_toast() {
        let auth = AuthContext::new(Identity::new(MemoryIdentity::new()));
        let notifier = Notifier::new();
        let busy = RwSignal::new(true);

        report_sign_in(Err(IdentityError::provider("auth/wrong-password", "Wrong password.")), auth, notifier, busy);

        assert!(!busy.get_untracked());
        assert!(!auth.snapshot().loading);
        let toasts = notifier.toasts().get_untracked().ordered(false);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].message, "Wrong password. (auth/wrong-password)");
    }

    #[test]
    fn successful_sign_in_raises_success_toast() {
        let auth = AuthContext::new(Identity::new(MemoryIdentity::new()));
        let notifier = Notifier::new();
        let busy = RwSignal::new(true);

        report_sign_in(Ok(credential(false)), auth, notifier, busy);

        assert!(!busy.get_untracked());
        let toasts = notifier.toasts().get_untracked().ordered(false);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, "Welcome back, Ada!");
    }
}
