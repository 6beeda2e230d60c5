//! Draft REST routes.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use client::net::types::{ApiErrorBody, DeleteResponse, Draft, DraftInput};

use crate::services::drafts::{self, DraftError};
use crate::state::AppState;

pub(crate) type ApiError = (StatusCode, Json<ApiErrorBody>);

pub(crate) fn draft_error_to_status(err: &DraftError) -> StatusCode {
    match err {
        DraftError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DraftError::NotFound(_) => StatusCode::NOT_FOUND,
        DraftError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DraftError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn draft_error_detail(err: &DraftError) -> String {
    match err {
        DraftError::InvalidId(_) => "Invalid Draft ID".to_owned(),
        DraftError::NotFound(_) => "Draft not found".to_owned(),
        DraftError::Invalid(reason) => (*reason).to_owned(),
        DraftError::Database(_) => "Internal server error".to_owned(),
    }
}

pub(crate) fn draft_error_response(err: DraftError) -> ApiError {
    if let DraftError::Database(e) = &err {
        tracing::error!(error = %e, "draft storage failed");
    }
    (draft_error_to_status(&err), Json(ApiErrorBody { detail: draft_error_detail(&err) }))
}

/// Unwrap a JSON body, turning axum's plain-text rejection into a
/// `{"detail"}` body with the same status.
pub(crate) fn draft_body(body: Result<Json<DraftInput>, JsonRejection>) -> Result<DraftInput, ApiError> {
    match body {
        Ok(Json(input)) => Ok(input),
        Err(rejection) => Err((rejection.status(), Json(ApiErrorBody { detail: rejection.body_text() }))),
    }
}

/// `POST /api/drafts`: create a draft.
pub async fn create_draft(
    State(state): State<AppState>,
    body: Result<Json<DraftInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Draft>), ApiError> {
    let body = draft_body(body)?;
    let draft = state.drafts.create(body).await.map_err(draft_error_response)?;
    Ok((StatusCode::CREATED, Json(draft)))
}

/// `GET /api/drafts/:id`: fetch one draft.
pub async fn get_draft(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Draft>, ApiError> {
    let id = drafts::parse_draft_id(&id).map_err(draft_error_response)?;
    let draft = state.drafts.get(id).await.map_err(draft_error_response)?;
    Ok(Json(draft))
}

/// `GET /api/drafts/user/:uid`: list a user's drafts.
pub async fn list_user_drafts(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Draft>>, ApiError> {
    let drafts = state.drafts.list_for_user(&uid).await.map_err(draft_error_response)?;
    Ok(Json(drafts))
}

/// `PUT /api/drafts/:id`: replace a draft.
pub async fn update_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<DraftInput>, JsonRejection>,
) -> Result<Json<Draft>, ApiError> {
    let id = drafts::parse_draft_id(&id).map_err(draft_error_response)?;
    let body = draft_body(body)?;
    let draft = state.drafts.update(id, body).await.map_err(draft_error_response)?;
    Ok(Json(draft))
}

/// `DELETE /api/drafts/:id`: remove a draft.
pub async fn delete_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = drafts::parse_draft_id(&id).map_err(draft_error_response)?;
    state.drafts.delete(id).await.map_err(draft_error_response)?;
    Ok(Json(DeleteResponse { status: "success".to_owned(), message: "Draft deleted successfully".to_owned() }))
}
