//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` owned by `AuthContext`. Route guards and user-aware
//! components read it; only identity operations and the provider's auth-state
//! listener write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::BTreeMap;

use crate::identity::AuthUser;

/// Application-local key/value data attached to the signed-in session.
pub type UserInfo = BTreeMap<String, serde_json::Value>;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    /// Last user reported by the provider; `None` when signed out.
    pub user: Option<AuthUser>,
    /// True from the start of an identity operation until the next
    /// auth-state callback.
    pub loading: bool,
    pub user_info: UserInfo,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, user_info: UserInfo::new() }
    }
}

impl AuthState {
    /// Mark an identity operation as in flight.
    pub fn begin_request(&mut self) {
        self.loading = true;
    }

    /// Record the user delivered by the auth-state listener.
    pub fn apply_auth_change(&mut self, user: Option<AuthUser>) {
        self.user = user;
        self.loading = false;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
