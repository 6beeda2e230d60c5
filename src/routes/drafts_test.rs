use super::*;
use axum::body::Body;
use axum::extract::FromRequest;
use axum::http::Request;
use uuid::Uuid;

use crate::state::test_helpers;

fn input(uid: &str, title: &str) -> DraftInput {
    DraftInput { uid: uid.to_owned(), title: title.to_owned(), content: String::new() }
}

// =============================================================================
// error mapping
// =============================================================================

#[test]
fn draft_error_to_status_maps_invalid_id() {
    let err = DraftError::InvalidId("nope".to_owned());
    assert_eq!(draft_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn draft_error_to_status_maps_not_found() {
    let err = DraftError::NotFound(Uuid::nil());
    assert_eq!(draft_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn draft_error_to_status_maps_validation() {
    let err = DraftError::Invalid("title is required");
    assert_eq!(draft_error_to_status(&err), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn draft_error_response_uses_detail_body() {
    let (status, Json(body)) = draft_error_response(DraftError::NotFound(Uuid::nil()));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Draft not found");

    let (status, Json(body)) = draft_error_response(DraftError::InvalidId("x".to_owned()));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.detail, "Invalid Draft ID");
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn create_returns_created_and_get_finds_it() {
    let state = test_helpers::test_app_state();

    let (status, Json(created)) = create_draft(State(state.clone()), Ok(Json(input("u1", "Essay")))).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);

    let Json(fetched) = get_draft(State(state), Path(created.id.clone())).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_with_invalid_id_is_bad_request() {
    let state = test_helpers::test_app_state();
    let (status, Json(body)) = get_draft(State(state), Path("12345".to_owned())).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.detail, "Invalid Draft ID");
}

#[tokio::test]
async fn update_with_invalid_id_is_bad_request() {
    let state = test_helpers::test_app_state();
    let (status, _) = update_draft(State(state), Path("bad".to_owned()), Ok(Json(input("u1", "T")))).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_user_drafts_only_returns_owner_drafts() {
    let state = test_helpers::test_app_state();
    create_draft(State(state.clone()), Ok(Json(input("owner", "Mine")))).await.unwrap();
    create_draft(State(state.clone()), Ok(Json(input("other", "Theirs")))).await.unwrap();

    let Json(listed) = list_user_drafts(State(state), Path("owner".to_owned())).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Mine");
}

#[tokio::test]
async fn delete_reports_success_then_not_found() {
    let state = test_helpers::test_app_state();
    let (_, Json(created)) = create_draft(State(state.clone()), Ok(Json(input("u1", "Temp")))).await.unwrap();

    let Json(body) = delete_draft(State(state.clone()), Path(created.id.clone())).await.unwrap();
    assert_eq!(body.status, "success");
    assert_eq!(body.message, "Draft deleted successfully");

    let (status, Json(body)) = delete_draft(State(state), Path(created.id)).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Draft not found");
}

#[tokio::test]
async fn create_with_blank_title_is_unprocessable() {
    let state = test_helpers::test_app_state();
    let (status, Json(body)) = create_draft(State(state), Ok(Json(input("u1", "")))).await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.detail, "title is required");
}

// =============================================================================
// request bodies
// =============================================================================

async fn parse_body(raw: &'static str) -> Result<Json<DraftInput>, JsonRejection> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/drafts")
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .unwrap();
    Json::<DraftInput>::from_request(request, &()).await
}

#[tokio::test]
async fn create_with_missing_title_reports_detail_json() {
    let state = test_helpers::test_app_state();
    let body = parse_body(r#"{"uid":"u1"}"#).await;
    assert!(body.is_err());

    let (status, Json(error)) = create_draft(State(state.clone()), body).await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error.detail.contains("title"), "detail was {}", error.detail);

    let Json(listed) = list_user_drafts(State(state), Path("u1".to_owned())).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn update_with_malformed_json_reports_detail_json() {
    let state = test_helpers::test_app_state();
    let (_, Json(created)) = create_draft(State(state.clone()), Ok(Json(input("u1", "Keep")))).await.unwrap();

    let body = parse_body("{not json").await;
    let (status, Json(error)) = update_draft(State(state.clone()), Path(created.id.clone()), body).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!error.detail.is_empty());

    let Json(fetched) = get_draft(State(state), Path(created.id)).await.unwrap();
    assert_eq!(fetched.title, "Keep");
}

#[tokio::test]
async fn draft_body_passes_valid_input_through() {
    let body = parse_body(r#"{"uid":"u1","title":"Ok"}"#).await;
    let parsed = draft_body(body).unwrap();
    assert_eq!(parsed, DraftInput { uid: "u1".to_owned(), title: "Ok".to_owned(), content: String::new() });
}
