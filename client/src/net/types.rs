//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this crate and serializes these exact types, so
//! serde round-trips stay lossless without a separate schema crate.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A persisted draft document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Draft identifier (UUID string).
    pub id: String,
    /// Identity-provider uid of the owner.
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Last-modified timestamp in milliseconds since the Unix epoch.
    pub updated_at: i64,
}

/// Request body for creating or replacing a draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftInput {
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Error body returned by the drafts API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// Body returned after a successful delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
    pub message: String,
}
