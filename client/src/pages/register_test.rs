use super::*;

#[test]
fn validate_registration_trims_fields() {
    assert_eq!(
        validate_registration(" Ada ", " https://example.com/a.png ", " ada@example.com ", "secret1"),
        Ok(Registration {
            name: "Ada".to_owned(),
            photo_url: "https://example.com/a.png".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "secret1".to_owned(),
        })
    );
}

#[test]
fn validate_registration_allows_missing_photo() {
    let form = validate_registration("Ada", "  ", "ada@example.com", "secret1").unwrap();
    assert_eq!(form.photo_url, "");
}

#[test]
fn validate_registration_requires_name() {
    assert_eq!(
        validate_registration("  ", "", "ada@example.com", "secret1"),
        Err("Enter your name.")
    );
}

#[test]
fn validate_registration_requires_credentials() {
    assert_eq!(validate_registration("Ada", "", "", "secret1"), Err("Enter both email and password."));
    assert_eq!(
        validate_registration("Ada", "", "ada@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_registration_rejects_non_http_photo() {
    assert_eq!(
        validate_registration("Ada", "javascript:alert(1)", "ada@example.com", "secret1"),
        Err("Photo URL must start with http:// or https://.")
    );
}
