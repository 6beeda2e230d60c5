//! Authentication context.
//!
//! DESIGN
//! ======
//! `AuthContext` forwards each operation to the injected identity provider.
//! The loading flag is raised synchronously when an operation is invoked,
//! before its future is first polled, and is lowered only by the provider's
//! auth-state listener. Operations that never trigger that listener (a
//! rejected sign-in, a profile update) leave loading raised; the caller
//! lowers it with [`AuthContext::set_loading`] or re-reads the provider with
//! [`AuthContext::sync_current_user`].
//!
//! ERROR HANDLING
//! ==============
//! Provider failures are returned to the caller unmodified.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;

use crate::identity::{AuthStateListener, AuthUser, Identity, IdentityError, Subscription, UserCredential};
use crate::state::auth::{AuthState, UserInfo};

/// Auth session handle provided to descendants of [`AuthProvider`].
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    identity: StoredValue<Identity>,
}

impl AuthContext {
    pub fn new(identity: Identity) -> Self {
        Self { state: RwSignal::new(AuthState::default()), identity: StoredValue::new(identity) }
    }

    /// Underlying state signal, for route guards and derived views.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Current state without subscribing the caller.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.with(|s| s.user.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn user_info(&self) -> UserInfo {
        self.state.with(|s| s.user_info.clone())
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }

    pub fn set_user_info(&self, info: UserInfo) {
        self.state.update(|s| s.user_info = info);
    }

    pub fn update_user_info(&self, f: impl FnOnce(&mut UserInfo)) {
        self.state.update(|s| f(&mut s.user_info));
    }

    fn begin(&self) -> Identity {
        self.state.update(AuthState::begin_request);
        self.identity.get_value()
    }

    /// Register a new email/password account.
    pub fn create_user(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<UserCredential, IdentityError>> + use<> {
        let identity = self.begin();
        let (email, password) = (email.to_owned(), password.to_owned());
        async move { identity.provider().create_user(&email, &password).await }
    }

    pub fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<UserCredential, IdentityError>> + use<> {
        let identity = self.begin();
        let (email, password) = (email.to_owned(), password.to_owned());
        async move { identity.provider().sign_in(&email, &password).await }
    }

    /// Sign out and drop all application-local user info.
    pub fn logout(&self) -> impl Future<Output = Result<(), IdentityError>> + use<> {
        let identity = self.begin();
        self.state.update(|s| s.user_info.clear());
        async move { identity.provider().sign_out().await }
    }

    /// Set display name and photo of the signed-in user.
    pub fn update_user_profile(
        &self,
        name: &str,
        photo_url: &str,
    ) -> impl Future<Output = Result<(), IdentityError>> + use<> {
        let identity = self.begin();
        let (name, photo_url) = (name.to_owned(), photo_url.to_owned());
        async move { identity.provider().update_profile(&name, &photo_url).await }
    }

    /// Sign in through the Google popup.
    pub fn google_login(&self) -> impl Future<Output = Result<UserCredential, IdentityError>> + use<> {
        let identity = self.begin();
        async move { identity.provider().sign_in_with_google().await }
    }

    /// Re-read the provider's current user and lower the loading flag.
    ///
    /// Used after operations that change the user without an auth-state
    /// callback, such as a profile update.
    pub fn sync_current_user(&self) {
        let user = self.identity.with_value(|identity| identity.provider().current_user());
        self.state.update(|s| s.apply_auth_change(user));
    }

    /// Subscribe the state signal to provider auth-state changes.
    pub fn watch(&self) -> Subscription {
        let state = self.state;
        let listener: AuthStateListener = Arc::new(move |user| {
            // The signal may already be disposed if the provider fires late.
            let _ = state.try_update(|s| s.apply_auth_change(user));
        });
        self.identity.with_value(|identity| identity.provider().on_auth_state_changed(listener))
    }
}

/// Fetch the [`AuthContext`] provided by an ancestor [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Provide [`AuthContext`] to `children`.
///
/// Uses the [`Identity`] found in context, or a detached provider when none
/// was injected (server rendering). The auth-state listener is registered on
/// mount, after hydration, and released when this component is torn down.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let identity = use_context::<Identity>().unwrap_or_else(Identity::detached);
    let auth = AuthContext::new(identity);
    provide_context(auth);

    // Effects never run during SSR, so the server-rendered tree always shows
    // the initial loading state the browser hydrates against.
    Effect::new(move |_| attach_listener(auth));

    children()
}

/// Register the auth-state listener for the current reactive owner and
/// release it when that owner is cleaned up.
pub(crate) fn attach_listener(auth: AuthContext) {
    let subscription = auth.watch();
    on_cleanup(move || drop(subscription));
}
