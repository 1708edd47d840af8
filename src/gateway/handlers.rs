use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use super::{AppState, ComposeBody, SearchQuery};
use crate::contracts::ComposeRequest;
use crate::guidance::GuidanceInput;
use crate::library::LibraryIngest;

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(json!({"error": message})))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// GET /health
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let composer = &state.composer;
    Json(json!({
        "status": "ok",
        "jobs": composer.list_jobs().len(),
        "libraryItems": composer.library().len(),
        "guidanceDocs": composer.guidance().len(),
    }))
}

/// POST /compose — queue a job and return its id
pub(super) async fn handle_compose(
    State(state): State<AppState>,
    body: Result<Json<ComposeBody>, JsonRejection>,
) -> impl IntoResponse {
    const REQUIRED: &str = "intent and brandId required";

    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!("compose body rejected: {rejection}");
            return error_response(StatusCode::BAD_REQUEST, REQUIRED);
        }
    };
    let (Some(intent), Some(brand_id)) = (non_empty(body.intent), non_empty(body.brand_id))
    else {
        return error_response(StatusCode::BAD_REQUEST, REQUIRED);
    };

    let request = ComposeRequest {
        intent,
        brand_id,
        constraints: body.constraints,
        seed_library_ids: body.seed_library_ids,
    };
    match state.composer.compose(request) {
        Ok(job_id) => (StatusCode::OK, Json(json!({"jobId": job_id}))),
        Err(error) => {
            tracing::error!("compose failed to start: {error}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &error.to_string())
        }
    }
}

/// GET /jobs — every job, newest first
pub(super) async fn handle_list_jobs(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({"jobs": state.composer.list_jobs()}))
}

/// GET /jobs/{id}
pub(super) async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.composer.get_job(&id) {
        Some(record) => (StatusCode::OK, Json(json!(record))),
        None => error_response(StatusCode::NOT_FOUND, "not found"),
    }
}

/// POST /library — ingest one library item
pub(super) async fn handle_library_ingest(
    State(state): State<AppState>,
    body: Result<Json<LibraryIngest>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(item)) => {
            let id = item.id.clone();
            state.composer.ingest_library(item);
            (StatusCode::CREATED, Json(json!({"id": id})))
        }
        Err(rejection) => error_response(
            StatusCode::BAD_REQUEST,
            &format!("invalid library item: {}", rejection.body_text()),
        ),
    }
}

/// GET /library/search?q=&brandId=&k=
pub(super) async fn handle_library_search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Some((q, brand_id, k)) = search_params(query) else {
        return error_response(StatusCode::BAD_REQUEST, "q and brandId required");
    };
    let response = state.composer.library_search(&q, &brand_id, k);
    (StatusCode::OK, Json(json!(response)))
}

/// POST /guidance — ingest guidance snippets
pub(super) async fn handle_guidance_ingest(
    State(state): State<AppState>,
    body: Result<Json<Vec<GuidanceInput>>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(docs)) => {
            let count = docs.len();
            state.composer.ingest_guidance(docs);
            (StatusCode::CREATED, Json(json!({"ingested": count})))
        }
        Err(rejection) => error_response(
            StatusCode::BAD_REQUEST,
            &format!("invalid guidance docs: {}", rejection.body_text()),
        ),
    }
}

/// GET /guidance/search?q=&brandId=&k=
pub(super) async fn handle_guidance_search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Some((q, brand_id, k)) = search_params(query) else {
        return error_response(StatusCode::BAD_REQUEST, "q and brandId required");
    };
    let response = state.composer.guidance_search(&q, &brand_id, k);
    (StatusCode::OK, Json(json!(response)))
}

fn search_params(
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Option<(String, String, Option<usize>)> {
    let Query(query) = query.ok()?;
    Some((non_empty(query.q)?, non_empty(query.brand_id)?, query.k))
}
