//! Draft persistence service.
//!
//! DESIGN
//! ======
//! `DraftStore` hides whether drafts live in process memory (local
//! development, tests) or in Postgres. Routes only see `Draft` DTOs from the
//! client crate and `DraftError`.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use std::collections::HashMap;
use std::sync::Arc;

use client::net::types::{Draft, DraftInput};
use sqlx::PgPool;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Maximum drafts returned by a per-user listing.
pub const USER_DRAFTS_LIMIT: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("invalid draft id: {0}")]
    InvalidId(String),
    #[error("draft not found: {0}")]
    NotFound(Uuid),
    #[error("invalid draft: {0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Parse a path segment into a draft id.
///
/// # Errors
///
/// Returns [`DraftError::InvalidId`] when the segment is not a UUID.
pub fn parse_draft_id(raw: &str) -> Result<Uuid, DraftError> {
    Uuid::parse_str(raw.trim()).map_err(|_| DraftError::InvalidId(raw.to_owned()))
}

fn validate(input: &DraftInput) -> Result<(), DraftError> {
    if input.uid.trim().is_empty() {
        return Err(DraftError::Invalid("uid is required"));
    }
    if input.title.trim().is_empty() {
        return Err(DraftError::Invalid("title is required"));
    }
    Ok(())
}

/// Current wall clock in milliseconds since the Unix epoch.
fn now_ms() -> i64 {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    i64::try_from(millis).unwrap_or(i64::MAX)
}

/// Next `updated_at` for an edit: wall clock, but never at or before `previous`.
fn bumped(previous: i64) -> i64 {
    now_ms().max(previous.saturating_add(1))
}

type DraftRow = (Uuid, String, String, String, i64, i64);

fn row_to_draft(row: DraftRow) -> Draft {
    let (id, uid, title, content, created_at, updated_at) = row;
    Draft { id: id.to_string(), uid, title, content, created_at, updated_at }
}

#[derive(Clone)]
pub enum DraftStore {
    Memory(Arc<RwLock<HashMap<Uuid, Draft>>>),
    Postgres(PgPool),
}

impl DraftStore {
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(Arc::new(RwLock::new(HashMap::new())))
    }

    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        Self::Postgres(pool)
    }

    /// Store a new draft.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank uid or title, or a database failure.
    pub async fn create(&self, input: DraftInput) -> Result<Draft, DraftError> {
        validate(&input)?;
        let id = Uuid::new_v4();
        let now = now_ms();
        let draft = Draft {
            id: id.to_string(),
            uid: input.uid,
            title: input.title,
            content: input.content,
            created_at: now,
            updated_at: now,
        };

        match self {
            Self::Memory(drafts) => {
                drafts.write().await.insert(id, draft.clone());
            }
            Self::Postgres(pool) => {
                sqlx::query(
                    "INSERT INTO drafts (id, uid, title, content, created_at, updated_at)
                     VALUES ($1, $2, $3, $4, $5, $6)",
                )
                .bind(id)
                .bind(&draft.uid)
                .bind(&draft.title)
                .bind(&draft.content)
                .bind(draft.created_at)
                .bind(draft.updated_at)
                .execute(pool)
                .await?;
            }
        }

        tracing::info!(%id, uid = %draft.uid, "draft created");
        Ok(draft)
    }

    /// Fetch one draft.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::NotFound`] when no draft has this id.
    pub async fn get(&self, id: Uuid) -> Result<Draft, DraftError> {
        match self {
            Self::Memory(drafts) => drafts.read().await.get(&id).cloned().ok_or(DraftError::NotFound(id)),
            Self::Postgres(pool) => {
                let row = sqlx::query_as::<_, DraftRow>(
                    "SELECT id, uid, title, content, created_at, updated_at FROM drafts WHERE id = $1",
                )
                .bind(id)
                .fetch_optional(pool)
                .await?
                .ok_or(DraftError::NotFound(id))?;
                Ok(row_to_draft(row))
            }
        }
    }

    /// List a user's drafts, most recently updated first, capped at
    /// [`USER_DRAFTS_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns an error on database failure.
    pub async fn list_for_user(&self, uid: &str) -> Result<Vec<Draft>, DraftError> {
        match self {
            Self::Memory(drafts) => {
                let mut owned: Vec<Draft> = drafts.read().await.values().filter(|d| d.uid == uid).cloned().collect();
                owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| b.created_at.cmp(&a.created_at)));
                owned.truncate(USER_DRAFTS_LIMIT);
                Ok(owned)
            }
            Self::Postgres(pool) => {
                let limit = i64::try_from(USER_DRAFTS_LIMIT).unwrap_or(i64::MAX);
                let rows = sqlx::query_as::<_, DraftRow>(
                    "SELECT id, uid, title, content, created_at, updated_at
                     FROM drafts
                     WHERE uid = $1
                     ORDER BY updated_at DESC, created_at DESC
                     LIMIT $2",
                )
                .bind(uid)
                .bind(limit)
                .fetch_all(pool)
                .await?;
                Ok(rows.into_iter().map(row_to_draft).collect())
            }
        }
    }

    /// Replace a draft's fields and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::NotFound`] for an unknown id, or a validation or
    /// database error.
    pub async fn update(&self, id: Uuid, input: DraftInput) -> Result<Draft, DraftError> {
        validate(&input)?;
        let updated = match self {
            Self::Memory(drafts) => {
                let mut drafts = drafts.write().await;
                let draft = drafts.get_mut(&id).ok_or(DraftError::NotFound(id))?;
                draft.uid = input.uid;
                draft.title = input.title;
                draft.content = input.content;
                draft.updated_at = bumped(draft.updated_at);
                draft.clone()
            }
            Self::Postgres(pool) => {
                let previous = self.get(id).await?;
                let row = sqlx::query_as::<_, DraftRow>(
                    "UPDATE drafts SET uid = $2, title = $3, content = $4, updated_at = $5
                     WHERE id = $1
                     RETURNING id, uid, title, content, created_at, updated_at",
                )
                .bind(id)
                .bind(&input.uid)
                .bind(&input.title)
                .bind(&input.content)
                .bind(bumped(previous.updated_at))
                .fetch_optional(pool)
                .await?
                .ok_or(DraftError::NotFound(id))?;
                row_to_draft(row)
            }
        };

        tracing::info!(%id, "draft updated");
        Ok(updated)
    }

    /// Remove a draft.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::NotFound`] when nothing was deleted.
    pub async fn delete(&self, id: Uuid) -> Result<(), DraftError> {
        let removed = match self {
            Self::Memory(drafts) => drafts.write().await.remove(&id).is_some(),
            Self::Postgres(pool) => {
                let result = sqlx::query("DELETE FROM drafts WHERE id = $1").bind(id).execute(pool).await?;
                result.rows_affected() == 1
            }
        };

        if !removed {
            return Err(DraftError::NotFound(id));
        }
        tracing::info!(%id, "draft deleted");
        Ok(())
    }
}
