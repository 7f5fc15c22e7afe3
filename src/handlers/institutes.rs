//! Institute management handlers

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::models::{Institute, NewInstitute};
use crate::state::AppState;
use crate::storage::InstituteRepo;

use super::DeleteResponse;

pub async fn list_institutes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Institute>>, ApiError> {
    let conn = state.db.get()?;

    let institutes = InstituteRepo::new(&conn)
        .list()
        .map_err(|e| ApiError::new(format!("Failed to list institutes: {}", e)))?;
    Ok(Json(institutes))
}

pub async fn create_institute(
    State(state): State<AppState>,
    Json(request): Json<NewInstitute>,
) -> Result<Json<Institute>, ApiError> {
    let conn = state.db.get()?;

    let institute = InstituteRepo::new(&conn)
        .create(&request)
        .map_err(|e| ApiError::new(format!("Failed to create institute: {}", e)))?;

    info!("Created institute {} ({})", institute.name, institute.institute_id);
    Ok(Json(institute))
}

pub async fn update_institute(
    State(state): State<AppState>,
    Path(institute_id): Path<i64>,
    Json(request): Json<NewInstitute>,
) -> Result<Json<Option<Institute>>, ApiError> {
    let conn = state.db.get()?;

    let institute = InstituteRepo::new(&conn)
        .update(institute_id, &request)
        .map_err(|e| ApiError::new(format!("Failed to update institute: {}", e)))?;

    if institute.is_some() {
        info!("Updated institute {}", institute_id);
    }
    Ok(Json(institute))
}

pub async fn delete_institute(
    State(state): State<AppState>,
    Path(institute_id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let conn = state.db.get()?;

    let deleted = InstituteRepo::new(&conn)
        .delete(institute_id)
        .map_err(|e| ApiError::new(format!("Failed to delete institute: {}", e)))?;

    if deleted {
        info!("Deleted institute {}", institute_id);
    }
    Ok(Json(DeleteResponse { deleted }))
}
