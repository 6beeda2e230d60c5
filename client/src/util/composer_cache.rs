//! Browser `localStorage` cache for the unsaved draft composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The drafts page keeps the title/body being typed in storage, keyed by the
//! signed-in uid, so a reload or sign-out does not lose work. SSR paths
//! no-op.

#[cfg(test)]
#[path = "composer_cache_test.rs"]
mod composer_cache_test;

use serde::{Deserialize, Serialize};

const STORAGE_PREFIX: &str = "draftdesk_composer";

/// Unsaved composer fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerDraft {
    pub title: String,
    pub content: String,
}

impl ComposerDraft {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

fn storage_key(uid: &str) -> String {
    format!("{STORAGE_PREFIX}:{uid}")
}

/// Load the cached composer for `uid`.
pub fn load(uid: &str) -> Option<ComposerDraft> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(&storage_key(uid)).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = storage_key(uid);
        None
    }
}

/// Save the composer for `uid`; blank composers clear the entry instead.
pub fn save(uid: &str, draft: &ComposerDraft) {
    if draft.is_blank() {
        clear(uid);
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(draft) else {
            return;
        };
        let _ = storage.set_item(&storage_key(uid), &raw);
    }
}

/// Remove the cached composer for `uid`.
pub fn clear(uid: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(&storage_key(uid));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = uid;
    }
}
