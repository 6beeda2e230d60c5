//! Identity provider bootstrap route.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use axum::Json;
use axum::extract::State;
use client::identity::config::IdentityConfig;

use crate::state::AppState;

/// `GET /api/identity/config`: which identity backend the browser should
/// start, plus the Firebase web config when that backend is Firebase.
pub async fn identity_config(State(state): State<AppState>) -> Json<IdentityConfig> {
    Json(state.identity.as_ref().clone())
}
