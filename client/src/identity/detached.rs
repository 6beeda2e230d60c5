//! Provider stand-in for environments without a browser SDK.
//!
//! During server rendering no identity session exists, so every operation
//! fails with `Unavailable` and listeners are never invoked. The UI therefore
//! renders its loading state until the browser build takes over.

use async_trait::async_trait;

use super::{AuthStateListener, AuthUser, IdentityError, IdentityProvider, Subscription, UserCredential};

const REASON: &str = "no identity session outside the browser";

#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedIdentity;

#[async_trait(?Send)]
impl IdentityProvider for DetachedIdentity {
    async fn create_user(&self, _email: &str, _password: &str) -> Result<UserCredential, IdentityError> {
        Err(IdentityError::Unavailable(REASON.to_owned()))
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<UserCredential, IdentityError> {
        Err(IdentityError::Unavailable(REASON.to_owned()))
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        Err(IdentityError::Unavailable(REASON.to_owned()))
    }

    async fn update_profile(&self, _display_name: &str, _photo_url: &str) -> Result<(), IdentityError> {
        Err(IdentityError::Unavailable(REASON.to_owned()))
    }

    async fn sign_in_with_google(&self) -> Result<UserCredential, IdentityError> {
        Err(IdentityError::Unavailable(REASON.to_owned()))
    }

    fn current_user(&self) -> Option<AuthUser> {
        None
    }

    fn on_auth_state_changed(&self, _listener: AuthStateListener) -> Subscription {
        Subscription::detached()
    }
}
