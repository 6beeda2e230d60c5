//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the draft store and the identity web config handed to browsers.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use client::identity::config::IdentityConfig;

use crate::services::drafts::DraftStore;

/// Shared application state. Clone is required by Axum; every field is cheap
/// to clone.
#[derive(Clone)]
pub struct AppState {
    pub drafts: DraftStore,
    pub identity: Arc<IdentityConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(drafts: DraftStore, identity: IdentityConfig) -> Self {
        Self { drafts, identity: Arc::new(identity) }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// State backed by the memory store and the memory identity backend.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(DraftStore::memory(), IdentityConfig::default())
    }
}
