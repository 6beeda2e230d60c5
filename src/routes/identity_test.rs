use super::*;
use client::identity::config::{FirebaseWebConfig, IdentityBackend};

use crate::services::drafts::DraftStore;

#[tokio::test]
async fn memory_backend_omits_firebase_block() {
    let state = crate::state::test_helpers::test_app_state();
    let Json(config) = identity_config(State(state)).await;
    assert_eq!(config.backend, IdentityBackend::Memory);

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json, serde_json::json!({ "backend": "memory" }));
}

#[tokio::test]
async fn firebase_backend_returns_web_config() {
    let identity = IdentityConfig {
        backend: IdentityBackend::Firebase,
        firebase: Some(FirebaseWebConfig {
            api_key: "key".to_owned(),
            auth_domain: "demo.firebaseapp.com".to_owned(),
            project_id: "demo".to_owned(),
            app_id: "1:2:web:3".to_owned(),
        }),
    };
    let state = AppState::new(DraftStore::memory(), identity.clone());

    let Json(config) = identity_config(State(state)).await;
    assert_eq!(config, identity);

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["firebase"]["authDomain"], "demo.firebaseapp.com");
}
