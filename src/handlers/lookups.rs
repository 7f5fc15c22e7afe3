//! Handlers for the name-only lookup families.
//!
//! Languages, types, topics, and keywords expose the same CRUD surface;
//! the per-family functions below are thin route-table entry points over
//! one shared implementation.

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::models::LookupEntry;
use crate::state::AppState;
use crate::storage::{LookupKind, LookupRepo};

use super::DeleteResponse;

#[derive(serde::Deserialize)]
pub struct LookupPayload {
    pub name: String,
}

async fn list_lookup(state: AppState, kind: LookupKind) -> Result<Json<Vec<LookupEntry>>, ApiError> {
    let conn = state.db.get()?;

    let entries = LookupRepo::new(&conn, kind)
        .list()
        .map_err(|e| ApiError::new(format!("Failed to list {}s: {}", kind.label(), e)))?;
    Ok(Json(entries))
}

async fn create_lookup(
    state: AppState,
    kind: LookupKind,
    payload: LookupPayload,
) -> Result<Json<LookupEntry>, ApiError> {
    let conn = state.db.get()?;

    let entry = LookupRepo::new(&conn, kind)
        .create(&payload.name)
        .map_err(|e| ApiError::new(format!("Failed to create {}: {}", kind.label(), e)))?;

    info!("Created {} {} ({})", kind.label(), entry.name, entry.id);
    Ok(Json(entry))
}

async fn update_lookup(
    state: AppState,
    kind: LookupKind,
    id: i64,
    payload: LookupPayload,
) -> Result<Json<Option<LookupEntry>>, ApiError> {
    let conn = state.db.get()?;

    let entry = LookupRepo::new(&conn, kind)
        .update(id, &payload.name)
        .map_err(|e| ApiError::new(format!("Failed to update {}: {}", kind.label(), e)))?;

    if entry.is_some() {
        info!("Updated {} {}", kind.label(), id);
    }
    Ok(Json(entry))
}

async fn delete_lookup(
    state: AppState,
    kind: LookupKind,
    id: i64,
) -> Result<Json<DeleteResponse>, ApiError> {
    let conn = state.db.get()?;

    let deleted = LookupRepo::new(&conn, kind)
        .delete(id)
        .map_err(|e| ApiError::new(format!("Failed to delete {}: {}", kind.label(), e)))?;

    if deleted {
        info!("Deleted {} {}", kind.label(), id);
    }
    Ok(Json(DeleteResponse { deleted }))
}

// Languages

pub async fn list_languages(State(state): State<AppState>) -> Result<Json<Vec<LookupEntry>>, ApiError> {
    list_lookup(state, LookupKind::Language).await
}

pub async fn create_language(
    State(state): State<AppState>,
    Json(payload): Json<LookupPayload>,
) -> Result<Json<LookupEntry>, ApiError> {
    create_lookup(state, LookupKind::Language, payload).await
}

pub async fn update_language(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<LookupPayload>,
) -> Result<Json<Option<LookupEntry>>, ApiError> {
    update_lookup(state, LookupKind::Language, id, payload).await
}

pub async fn delete_language(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    delete_lookup(state, LookupKind::Language, id).await
}

// Types

pub async fn list_types(State(state): State<AppState>) -> Result<Json<Vec<LookupEntry>>, ApiError> {
    list_lookup(state, LookupKind::ThesisType).await
}

pub async fn create_type(
    State(state): State<AppState>,
    Json(payload): Json<LookupPayload>,
) -> Result<Json<LookupEntry>, ApiError> {
    create_lookup(state, LookupKind::ThesisType, payload).await
}

pub async fn update_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<LookupPayload>,
) -> Result<Json<Option<LookupEntry>>, ApiError> {
    update_lookup(state, LookupKind::ThesisType, id, payload).await
}

pub async fn delete_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    delete_lookup(state, LookupKind::ThesisType, id).await
}

// Topics

pub async fn list_topics(State(state): State<AppState>) -> Result<Json<Vec<LookupEntry>>, ApiError> {
    list_lookup(state, LookupKind::Topic).await
}

pub async fn create_topic(
    State(state): State<AppState>,
    Json(payload): Json<LookupPayload>,
) -> Result<Json<LookupEntry>, ApiError> {
    create_lookup(state, LookupKind::Topic, payload).await
}

pub async fn update_topic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<LookupPayload>,
) -> Result<Json<Option<LookupEntry>>, ApiError> {
    update_lookup(state, LookupKind::Topic, id, payload).await
}

pub async fn delete_topic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    delete_lookup(state, LookupKind::Topic, id).await
}

// Keywords

pub async fn list_keywords(State(state): State<AppState>) -> Result<Json<Vec<LookupEntry>>, ApiError> {
    list_lookup(state, LookupKind::Keyword).await
}

pub async fn create_keyword(
    State(state): State<AppState>,
    Json(payload): Json<LookupPayload>,
) -> Result<Json<LookupEntry>, ApiError> {
    create_lookup(state, LookupKind::Keyword, payload).await
}

pub async fn update_keyword(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<LookupPayload>,
) -> Result<Json<Option<LookupEntry>>, ApiError> {
    update_lookup(state, LookupKind::Keyword, id, payload).await
}

pub async fn delete_keyword(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    delete_lookup(state, LookupKind::Keyword, id).await
}
