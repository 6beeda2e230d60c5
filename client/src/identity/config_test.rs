use super::*;

#[test]
fn backend_parses_case_insensitively() {
    assert_eq!("Firebase".parse::<IdentityBackend>(), Ok(IdentityBackend::Firebase));
    assert_eq!(" memory ".parse::<IdentityBackend>(), Ok(IdentityBackend::Memory));
}

#[test]
fn backend_rejects_unknown_values() {
    assert_eq!(
        "okta".parse::<IdentityBackend>(),
        Err("unknown identity provider: okta".to_owned())
    );
}

#[test]
fn backend_defaults_to_memory() {
    assert_eq!(IdentityBackend::default(), IdentityBackend::Memory);
    assert_eq!(IdentityConfig::default().firebase, None);
}

#[test]
fn firebase_config_uses_sdk_field_names() {
    let config = IdentityConfig {
        backend: IdentityBackend::Firebase,
        firebase: Some(FirebaseWebConfig {
            api_key: "key".to_owned(),
            auth_domain: "demo.firebaseapp.com".to_owned(),
            project_id: "demo".to_owned(),
            app_id: "1:2:web:3".to_owned(),
        }),
    };
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["backend"], "firebase");
    assert_eq!(json["firebase"]["apiKey"], "key");
    assert_eq!(json["firebase"]["authDomain"], "demo.firebaseapp.com");
    assert_eq!(json["firebase"]["projectId"], "demo");
    assert_eq!(json["firebase"]["appId"], "1:2:web:3");
}

#[test]
fn memory_config_omits_firebase_block() {
    let json = serde_json::to_value(IdentityConfig::default()).unwrap();
    assert_eq!(json, serde_json::json!({ "backend": "memory" }));
}
