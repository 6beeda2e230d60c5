//! Identity configuration handed from the server to the browser.
//!
//! The server reads provider settings from its environment and serves them at
//! `/api/identity/config`; the hydrate entry point fetches them before the app
//! mounts so the SDK is initialized exactly once.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which provider implementation the browser should use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityBackend {
    /// Hosted Firebase Authentication.
    Firebase,
    /// In-page memory provider; accounts vanish on reload.
    #[default]
    Memory,
}

impl FromStr for IdentityBackend {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "firebase" => Ok(Self::Firebase),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown identity provider: {other}")),
        }
    }
}

/// Web-app configuration object passed to `firebase.initializeApp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseWebConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub app_id: String,
}

/// Payload of `GET /api/identity/config`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub backend: IdentityBackend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firebase: Option<FirebaseWebConfig>,
}
