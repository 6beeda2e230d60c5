//! Identity-provider value types shared by every provider implementation.
//!
//! DESIGN
//! ======
//! Users and credentials are plain snapshots copied out of the provider so
//! they can live in Leptos signals. Listener registration is represented by
//! a `Subscription` guard; releasing it is tied to `Drop` so a component that
//! owns one cannot leak its listener.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Snapshot of the signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned stable user id.
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub email_verified: bool,
    /// Sign-in method, e.g. `"password"` or `"google.com"`.
    pub provider_id: String,
}

impl AuthUser {
    /// Best human-readable label: display name, then email, then uid.
    #[must_use]
    pub fn label(&self) -> String {
        self.display_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.uid.clone())
    }
}

/// Result of a successful sign-up or sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    pub user: AuthUser,
    pub is_new_user: bool,
}

/// Errors surfaced by identity operations.
///
/// Provider failures are passed through verbatim; this crate never classifies
/// or retries them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// Failure raised by the provider SDK (e.g. `auth/wrong-password`).
    #[error("{message} ({code})")]
    Provider { code: String, message: String },

    /// A profile update was attempted with nobody signed in.
    #[error("no user is currently signed in")]
    NoCurrentUser,

    /// The provider cannot run in this environment (e.g. during SSR).
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

impl IdentityError {
    pub(crate) fn provider(code: &str, message: &str) -> Self {
        Self::Provider { code: code.to_owned(), message: message.to_owned() }
    }

    /// Provider error code, when the failure came from the provider.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Provider { code, .. } => Some(code),
            Self::NoCurrentUser | Self::Unavailable(_) => None,
        }
    }
}

/// Callback invoked with the current user on every auth-state change.
pub type AuthStateListener = Arc<dyn Fn(Option<AuthUser>) + Send + Sync>;

/// Registration handle for an auth-state listener.
///
/// The listener stays registered until the guard is dropped or
/// [`Subscription::unsubscribe`] is called; release happens exactly once.
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self { release: Some(Box::new(release)) }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Whether the listener is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Unregister the listener now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
