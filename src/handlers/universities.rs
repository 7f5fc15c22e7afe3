//! University management handlers

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::models::University;
use crate::state::AppState;
use crate::storage::UniversityRepo;

use super::DeleteResponse;

#[derive(serde::Deserialize)]
pub struct UniversityPayload {
    pub name: String,
}

pub async fn list_universities(
    State(state): State<AppState>,
) -> Result<Json<Vec<University>>, ApiError> {
    let conn = state.db.get()?;

    let universities = UniversityRepo::new(&conn)
        .list()
        .map_err(|e| ApiError::new(format!("Failed to list universities: {}", e)))?;
    Ok(Json(universities))
}

pub async fn create_university(
    State(state): State<AppState>,
    Json(request): Json<UniversityPayload>,
) -> Result<Json<University>, ApiError> {
    let conn = state.db.get()?;

    let university = UniversityRepo::new(&conn)
        .create(&request.name)
        .map_err(|e| ApiError::new(format!("Failed to create university: {}", e)))?;

    info!("Created university {} ({})", university.name, university.university_id);
    Ok(Json(university))
}

pub async fn update_university(
    State(state): State<AppState>,
    Path(university_id): Path<i64>,
    Json(request): Json<UniversityPayload>,
) -> Result<Json<Option<University>>, ApiError> {
    let conn = state.db.get()?;

    let university = UniversityRepo::new(&conn)
        .update(university_id, &request.name)
        .map_err(|e| ApiError::new(format!("Failed to update university: {}", e)))?;

    if university.is_some() {
        info!("Updated university {}", university_id);
    }
    Ok(Json(university))
}

pub async fn delete_university(
    State(state): State<AppState>,
    Path(university_id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let conn = state.db.get()?;

    let deleted = UniversityRepo::new(&conn)
        .delete(university_id)
        .map_err(|e| ApiError::new(format!("Failed to delete university: {}", e)))?;

    if deleted {
        info!("Deleted university {}", university_id);
    }
    Ok(Json(DeleteResponse { deleted }))
}
