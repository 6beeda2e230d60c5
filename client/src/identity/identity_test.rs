use futures::executor::block_on;

use super::config::{FirebaseWebConfig, IdentityBackend, IdentityConfig};
use super::*;

#[test]
fn memory_config_yields_working_provider() {
    let identity = from_config(&IdentityConfig::default());
    let cred = block_on(identity.provider().create_user("ada@example.com", "secret1")).unwrap();
    assert_eq!(identity.provider().current_user(), Some(cred.user));
}

#[test]
fn firebase_without_web_config_is_detached() {
    let identity = from_config(&IdentityConfig { backend: IdentityBackend::Firebase, firebase: None });
    let err = block_on(identity.provider().sign_out()).unwrap_err();
    assert!(matches!(err, IdentityError::Unavailable(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn firebase_outside_browser_is_detached() {
    let identity = from_config(&IdentityConfig {
        backend: IdentityBackend::Firebase,
        firebase: Some(FirebaseWebConfig {
            api_key: "key".to_owned(),
            auth_domain: "demo.firebaseapp.com".to_owned(),
            project_id: "demo".to_owned(),
            app_id: "app".to_owned(),
        }),
    });
    assert!(identity.provider().current_user().is_none());
    assert!(!identity.provider().on_auth_state_changed(std::sync::Arc::new(|_| {})).is_active());
}

#[test]
fn cloned_handles_share_one_provider() {
    let identity = Identity::new(memory::MemoryIdentity::new());
    let other = identity.clone();
    block_on(identity.provider().create_user("ada@example.com", "secret1")).unwrap();
    assert!(other.provider().current_user().is_some());
}

#[test]
fn failed_config_fetch_is_detached_not_memory() {
    let identity = identity_for(Err("identity config failed: 502".to_owned()));
    let err = block_on(identity.provider().create_user("ada@example.com", "secret1")).unwrap_err();
    assert!(matches!(err, IdentityError::Unavailable(_)));
    assert!(identity.provider().current_user().is_none());
}

#[test]
fn fetched_memory_config_is_honored() {
    let identity = identity_for(Ok(IdentityConfig::default()));
    assert!(block_on(identity.provider().create_user("ada@example.com", "secret1")).is_ok());
}
