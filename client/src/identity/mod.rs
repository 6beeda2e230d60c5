//! Identity-provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication, token refresh, and session persistence belong to the
//! hosted identity provider. This module only describes the operations the UI
//! consumes and ships three implementations: the Firebase SDK bindings used in
//! the browser, an in-memory provider for local development and tests, and a
//! detached stand-in for server rendering.

pub mod config;
pub mod detached;
#[cfg(feature = "hydrate")]
pub mod firebase;
pub mod memory;
pub mod types;

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::Arc;

use async_trait::async_trait;

pub use types::{AuthStateListener, AuthUser, IdentityError, Subscription, UserCredential};

/// Operations the UI needs from an identity provider.
///
/// Futures are not required to be `Send`: browser SDK promises are bound to
/// the main thread.
#[async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Register a new email/password account and sign it in.
    async fn create_user(&self, email: &str, password: &str) -> Result<UserCredential, IdentityError>;

    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserCredential, IdentityError>;

    /// Sign out the current user.
    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Update display name and photo of the currently signed-in user.
    async fn update_profile(&self, display_name: &str, photo_url: &str) -> Result<(), IdentityError>;

    /// Sign in through the Google OAuth popup.
    async fn sign_in_with_google(&self) -> Result<UserCredential, IdentityError>;

    /// The user the provider currently considers signed in.
    fn current_user(&self) -> Option<AuthUser>;

    /// Register `listener` for auth-state changes.
    fn on_auth_state_changed(&self, listener: AuthStateListener) -> Subscription;
}

/// Shared handle to the active provider, passed down through Leptos context.
#[derive(Clone)]
pub struct Identity(Arc<dyn IdentityProvider>);

impl Identity {
    pub fn new<P: IdentityProvider + 'static>(provider: P) -> Self {
        Self(Arc::new(provider))
    }

    /// Provider used when nothing was injected (server rendering).
    pub fn detached() -> Self {
        Self::new(detached::DetachedIdentity)
    }

    #[must_use]
    pub fn provider(&self) -> &dyn IdentityProvider {
        self.0.as_ref()
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Identity").finish_non_exhaustive()
    }
}

/// Build the provider described by `config`.
///
/// Falls back to the detached provider when Firebase is requested but cannot
/// be initialized, so the UI stays in its loading state instead of signing
/// users into a throwaway memory session.
pub fn from_config(config: &config::IdentityConfig) -> Identity {
    match (config.backend, config.firebase.as_ref()) {
        (config::IdentityBackend::Memory, _) => Identity::new(memory::MemoryIdentity::new()),
        (config::IdentityBackend::Firebase, Some(web)) => firebase_identity(web),
        (config::IdentityBackend::Firebase, None) => {
            #[cfg(feature = "hydrate")]
            log::error!("identity: firebase selected without web config");
            Identity::detached()
        }
    }
}

/// Build the provider from the result of fetching the server's identity
/// config. A failed fetch yields the detached provider: the server may expect
/// Firebase, and a memory session would sign users into nothing.
pub fn identity_for(fetched: Result<config::IdentityConfig, String>) -> Identity {
    match fetched {
        Ok(config) => from_config(&config),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::error!("identity: config unavailable, staying signed out: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            Identity::detached()
        }
    }
}

#[cfg(feature = "hydrate")]
fn firebase_identity(web: &config::FirebaseWebConfig) -> Identity {
    match firebase::FirebaseIdentity::initialize(web) {
        Ok(provider) => {
            log::info!("identity: firebase project {}", web.project_id);
            Identity::new(provider)
        }
        Err(e) => {
            log::error!("identity: firebase init failed: {e}");
            Identity::detached()
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn firebase_identity(_web: &config::FirebaseWebConfig) -> Identity {
    Identity::detached()
}
