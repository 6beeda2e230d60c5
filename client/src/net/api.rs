//! REST API helpers for communicating with the host server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so pages can surface failures through the
//! notifier without crashing hydration. Non-OK responses carry the server's
//! `detail` text when present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Draft, DraftInput};
use crate::identity::config::IdentityConfig;

#[cfg(any(test, feature = "hydrate"))]
const DRAFTS_ENDPOINT: &str = "/api/drafts";

#[cfg(any(test, feature = "hydrate"))]
fn draft_endpoint(draft_id: &str) -> String {
    format!("{DRAFTS_ENDPOINT}/{draft_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_drafts_endpoint(uid: &str) -> String {
    format!("{DRAFTS_ENDPOINT}/user/{uid}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("{action} failed: {detail}"),
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn failure(action: &str, resp: gloo_net::http::Response) -> String {
    let detail = resp.json::<super::types::ApiErrorBody>().await.ok().map(|b| b.detail);
    request_failed_message(action, resp.status(), detail.as_deref())
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

/// Fetch the identity provider configuration from `/api/identity/config`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is malformed.
pub async fn fetch_identity_config() -> Result<IdentityConfig, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/identity/config")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("identity config", resp).await);
        }
        resp.json::<IdentityConfig>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// List a user's drafts via `GET /api/drafts/user/{uid}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn list_user_drafts(uid: &str) -> Result<Vec<Draft>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&user_drafts_endpoint(uid))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("list drafts", resp).await);
        }
        resp.json::<Vec<Draft>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = uid;
        unavailable()
    }
}

/// Fetch one draft via `GET /api/drafts/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the draft does not exist.
pub async fn fetch_draft(draft_id: &str) -> Result<Draft, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&draft_endpoint(draft_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("fetch draft", resp).await);
        }
        resp.json::<Draft>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft_id;
        unavailable()
    }
}

/// Create a draft via `POST /api/drafts`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the draft.
pub async fn create_draft(input: &DraftInput) -> Result<Draft, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(DRAFTS_ENDPOINT)
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("create draft", resp).await);
        }
        resp.json::<Draft>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        unavailable()
    }
}

/// Replace a draft via `PUT /api/drafts/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the draft does not exist.
pub async fn update_draft(draft_id: &str, input: &DraftInput) -> Result<Draft, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&draft_endpoint(draft_id))
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("update draft", resp).await);
        }
        resp.json::<Draft>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (draft_id, input);
        unavailable()
    }
}

/// Delete a draft via `DELETE /api/drafts/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the draft does not exist.
pub async fn delete_draft(draft_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&draft_endpoint(draft_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("delete draft", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft_id;
        unavailable()
    }
}
