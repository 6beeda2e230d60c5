//! Firebase Authentication bindings for the browser build.
//!
//! The compat SDK (`firebase-app-compat.js` + `firebase-auth-compat.js`) is
//! loaded by the page shell and exposes a global `firebase` namespace. Every
//! call goes through `firebase.auth()`, so `FirebaseIdentity` itself holds no
//! JS handles and can sit in Leptos context.
//!
//! JS callbacks registered with `onAuthStateChanged` are kept alive in a
//! thread-local registry keyed by subscription id; dropping the
//! `Subscription` calls the SDK's unsubscribe function and frees the closure.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::config::FirebaseWebConfig;
use super::{AuthStateListener, AuthUser, IdentityError, IdentityProvider, Subscription, UserCredential};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = firebase, js_name = initializeApp, catch)]
    fn initialize_app(config: &JsValue) -> Result<JsValue, JsValue>;

    type Auth;

    #[wasm_bindgen(js_namespace = firebase, js_name = auth)]
    fn auth() -> Auth;

    #[wasm_bindgen(method, js_name = createUserWithEmailAndPassword)]
    fn create_user_with_email_and_password(this: &Auth, email: &str, password: &str) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = signInWithEmailAndPassword)]
    fn sign_in_with_email_and_password(this: &Auth, email: &str, password: &str) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = signOut)]
    fn sign_out(this: &Auth) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = signInWithPopup)]
    fn sign_in_with_popup(this: &Auth, provider: &GoogleAuthProvider) -> js_sys::Promise;

    #[wasm_bindgen(method, getter, js_name = currentUser)]
    fn current_user(this: &Auth) -> Option<User>;

    #[wasm_bindgen(method, js_name = onAuthStateChanged)]
    fn on_auth_state_changed(this: &Auth, observer: &Closure<dyn FnMut(JsValue)>) -> js_sys::Function;

    type User;

    #[wasm_bindgen(method, getter)]
    fn uid(this: &User) -> String;

    #[wasm_bindgen(method, getter)]
    fn email(this: &User) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = displayName)]
    fn display_name(this: &User) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = photoURL)]
    fn photo_url(this: &User) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = emailVerified)]
    fn email_verified(this: &User) -> bool;

    #[wasm_bindgen(method, getter, js_name = providerData)]
    fn provider_data(this: &User) -> js_sys::Array;

    #[wasm_bindgen(method, js_name = updateProfile)]
    fn update_profile(this: &User, profile: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = ["firebase", "auth"])]
    type GoogleAuthProvider;

    #[wasm_bindgen(constructor, js_namespace = ["firebase", "auth"])]
    fn new() -> GoogleAuthProvider;
}

struct Registration {
    _observer: Closure<dyn FnMut(JsValue)>,
    unsubscribe: js_sys::Function,
}

thread_local! {
    static REGISTRATIONS: RefCell<HashMap<u64, Registration>> = RefCell::new(HashMap::new());
    static NEXT_REGISTRATION: Cell<u64> = const { Cell::new(0) };
}

/// Identity provider backed by the Firebase JS SDK.
#[derive(Clone, Copy, Debug)]
pub struct FirebaseIdentity;

impl FirebaseIdentity {
    /// Initialize the default Firebase app with `config`.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` when the SDK scripts are missing, or the SDK's own
    /// error if initialization is rejected. Re-initialization is accepted.
    pub fn initialize(config: &FirebaseWebConfig) -> Result<Self, IdentityError> {
        let sdk_loaded = js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("firebase")).unwrap_or(false);
        if !sdk_loaded {
            return Err(IdentityError::Unavailable("firebase SDK script not loaded".to_owned()));
        }
        let raw = serde_json::to_string(config).map_err(|e| IdentityError::Unavailable(e.to_string()))?;
        let options = js_sys::JSON::parse(&raw).map_err(|e| js_error(&e))?;
        match initialize_app(&options) {
            Ok(_) => Ok(Self),
            Err(e) => {
                let err = js_error(&e);
                if err.code() == Some("app/duplicate-app") { Ok(Self) } else { Err(err) }
            }
        }
    }
}

fn js_string_field(value: &JsValue, field: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(field)).ok().and_then(|v| v.as_string())
}

fn js_error(value: &JsValue) -> IdentityError {
    let code = js_string_field(value, "code").unwrap_or_else(|| "unknown".to_owned());
    let message = js_string_field(value, "message")
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "identity provider request failed".to_owned());
    IdentityError::Provider { code, message }
}

fn snapshot(user: &User) -> AuthUser {
    let provider_id = js_string_field(&user.provider_data().get(0), "providerId").unwrap_or_else(|| "firebase".to_owned());
    AuthUser {
        uid: user.uid(),
        email: user.email(),
        display_name: user.display_name(),
        photo_url: user.photo_url(),
        email_verified: user.email_verified(),
        provider_id,
    }
}

fn user_from_js(value: &JsValue) -> Option<AuthUser> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    Some(snapshot(value.unchecked_ref::<User>()))
}

fn credential_from_js(value: &JsValue) -> Result<UserCredential, IdentityError> {
    let user_value = js_sys::Reflect::get(value, &JsValue::from_str("user")).map_err(|e| js_error(&e))?;
    let user = user_from_js(&user_value)
        .ok_or_else(|| IdentityError::provider("auth/internal-error", "credential carried no user"))?;
    let is_new_user = js_sys::Reflect::get(value, &JsValue::from_str("additionalUserInfo"))
        .ok()
        .filter(|info| !info.is_null() && !info.is_undefined())
        .and_then(|info| js_sys::Reflect::get(&info, &JsValue::from_str("isNewUser")).ok())
        .and_then(|flag| flag.as_bool())
        .unwrap_or(false);
    Ok(UserCredential { user, is_new_user })
}

async fn settle(promise: js_sys::Promise) -> Result<JsValue, IdentityError> {
    JsFuture::from(promise).await.map_err(|e| js_error(&e))
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseIdentity {
    async fn create_user(&self, email: &str, password: &str) -> Result<UserCredential, IdentityError> {
        let value = settle(auth().create_user_with_email_and_password(email, password)).await?;
        credential_from_js(&value)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserCredential, IdentityError> {
        let value = settle(auth().sign_in_with_email_and_password(email, password)).await?;
        credential_from_js(&value)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        settle(auth().sign_out()).await.map(|_| ())
    }

    async fn update_profile(&self, display_name: &str, photo_url: &str) -> Result<(), IdentityError> {
        let user = auth().current_user().ok_or(IdentityError::NoCurrentUser)?;
        let profile = js_sys::Object::new();
        js_sys::Reflect::set(&profile, &JsValue::from_str("displayName"), &JsValue::from_str(display_name))
            .map_err(|e| js_error(&e))?;
        js_sys::Reflect::set(&profile, &JsValue::from_str("photoURL"), &JsValue::from_str(photo_url))
            .map_err(|e| js_error(&e))?;
        settle(user.update_profile(&profile)).await.map(|_| ())
    }

    async fn sign_in_with_google(&self) -> Result<UserCredential, IdentityError> {
        let provider = GoogleAuthProvider::new();
        let value = settle(auth().sign_in_with_popup(&provider)).await?;
        credential_from_js(&value)
    }

    fn current_user(&self) -> Option<AuthUser> {
        auth().current_user().map(|user| snapshot(&user))
    }

    fn on_auth_state_changed(&self, listener: AuthStateListener) -> Subscription {
        let observer = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            listener(user_from_js(&value));
        });
        let unsubscribe = auth().on_auth_state_changed(&observer);
        let id = NEXT_REGISTRATION.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        REGISTRATIONS.with(|regs| {
            regs.borrow_mut().insert(id, Registration { _observer: observer, unsubscribe });
        });
        log::debug!("identity: auth listener {id} registered");

        Subscription::new(move || {
            let registration = REGISTRATIONS.with(|regs| regs.borrow_mut().remove(&id));
            if let Some(registration) = registration {
                let _ = registration.unsubscribe.call0(&JsValue::NULL);
                log::debug!("identity: auth listener {id} released");
            }
        })
    }
}
