//! In-memory identity provider.
//!
//! DESIGN
//! ======
//! Mirrors the observable contract of the hosted SDK closely enough for local
//! development and tests: Firebase-style error codes, an immediate listener
//! callback on subscribe, a callback after every sign-in or sign-out, and no
//! callback after a profile update. Accounts live only as long as the value.
//!
//! Listeners are invoked after the internal lock is released so a listener may
//! call back into the provider.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{AuthStateListener, AuthUser, IdentityError, IdentityProvider, Subscription, UserCredential};

pub const MIN_PASSWORD_LEN: usize = 6;

const DEFAULT_GOOGLE_EMAIL: &str = "google.user@example.com";
const DEFAULT_GOOGLE_NAME: &str = "Google User";

struct Account {
    password: Option<String>,
    user: AuthUser,
}

#[derive(Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    current: Option<AuthUser>,
    listeners: Vec<(u64, AuthStateListener)>,
    next_listener_id: u64,
    google_account: Option<(String, String)>,
}

/// Identity provider that keeps accounts in process memory.
#[derive(Clone, Default)]
pub struct MemoryIdentity {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryIdentity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Account returned by the simulated Google popup.
    #[must_use]
    pub fn with_google_account(self, email: &str, display_name: &str) -> Self {
        self.lock().google_account = Some((email.to_owned(), display_name.to_owned()));
        self
    }

    /// Register an email/password account without signing it in.
    pub fn seed_account(&self, email: &str, password: &str, display_name: Option<&str>) -> AuthUser {
        let user = new_user(email, display_name, "password", false);
        self.lock().accounts.insert(
            account_key(email),
            Account { password: Some(password.to_owned()), user: user.clone() },
        );
        user
    }

    /// Number of registered auth-state listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_current_and_notify(&self, user: Option<AuthUser>) {
        let listeners: Vec<AuthStateListener> = {
            let mut inner = self.lock();
            inner.current.clone_from(&user);
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(user.clone());
        }
    }
}

fn account_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn new_user(email: &str, display_name: Option<&str>, provider_id: &str, email_verified: bool) -> AuthUser {
    AuthUser {
        uid: uuid::Uuid::new_v4().simple().to_string(),
        email: Some(email.trim().to_owned()),
        display_name: display_name.map(str::to_owned),
        photo_url: None,
        email_verified,
        provider_id: provider_id.to_owned(),
    }
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[async_trait(?Send)]
impl IdentityProvider for MemoryIdentity {
    async fn create_user(&self, email: &str, password: &str) -> Result<UserCredential, IdentityError> {
        if !is_plausible_email(email) {
            return Err(IdentityError::provider("auth/invalid-email", "The email address is badly formatted."));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(IdentityError::provider(
                "auth/weak-password",
                "Password should be at least 6 characters.",
            ));
        }
        let user = {
            let mut inner = self.lock();
            let key = account_key(email);
            if inner.accounts.contains_key(&key) {
                return Err(IdentityError::provider(
                    "auth/email-already-in-use",
                    "The email address is already in use by another account.",
                ));
            }
            let user = new_user(email, None, "password", false);
            inner
                .accounts
                .insert(key, Account { password: Some(password.to_owned()), user: user.clone() });
            user
        };
        self.set_current_and_notify(Some(user.clone()));
        Ok(UserCredential { user, is_new_user: true })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserCredential, IdentityError> {
        let user = {
            let inner = self.lock();
            let Some(account) = inner.accounts.get(&account_key(email)) else {
                return Err(IdentityError::provider(
                    "auth/user-not-found",
                    "There is no user record corresponding to this identifier.",
                ));
            };
            if account.password.as_deref() != Some(password) {
                return Err(IdentityError::provider(
                    "auth/wrong-password",
                    "The password is invalid or the user does not have a password.",
                ));
            }
            account.user.clone()
        };
        self.set_current_and_notify(Some(user.clone()));
        Ok(UserCredential { user, is_new_user: false })
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.set_current_and_notify(None);
        Ok(())
    }

    async fn update_profile(&self, display_name: &str, photo_url: &str) -> Result<(), IdentityError> {
        let mut inner = self.lock();
        let Some(current) = inner.current.as_mut() else {
            return Err(IdentityError::NoCurrentUser);
        };
        current.display_name = Some(display_name.to_owned());
        current.photo_url = Some(photo_url.to_owned()).filter(|url| !url.is_empty());
        let updated = current.clone();
        if let Some(account) = updated.email.as_deref().map(account_key) {
            if let Some(record) = inner.accounts.get_mut(&account) {
                record.user = updated;
            }
        }
        Ok(())
    }

    async fn sign_in_with_google(&self) -> Result<UserCredential, IdentityError> {
        let (user, is_new_user) = {
            let mut inner = self.lock();
            let (email, name) = inner
                .google_account
                .clone()
                .unwrap_or_else(|| (DEFAULT_GOOGLE_EMAIL.to_owned(), DEFAULT_GOOGLE_NAME.to_owned()));
            let key = account_key(&email);
            match inner.accounts.get(&key) {
                Some(account) => (account.user.clone(), false),
                None => {
                    let user = new_user(&email, Some(&name), "google.com", true);
                    inner.accounts.insert(key, Account { password: None, user: user.clone() });
                    (user, true)
                }
            }
        };
        self.set_current_and_notify(Some(user.clone()));
        Ok(UserCredential { user, is_new_user })
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.lock().current.clone()
    }

    fn on_auth_state_changed(&self, listener: AuthStateListener) -> Subscription {
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, listener.clone()));
            (id, inner.current.clone())
        };
        listener(current);

        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
                inner.listeners.retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}
