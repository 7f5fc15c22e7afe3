//! Thesis registration, listing, and deletion handlers

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::models::{NewThesis, Thesis};
use crate::state::AppState;
use crate::storage::ThesisRepo;

#[derive(serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_theses(State(state): State<AppState>) -> Result<Json<Vec<Thesis>>, ApiError> {
    let conn = state.db.get()?;

    let theses = ThesisRepo::new(&conn)
        .list()
        .map_err(|e| ApiError::new(format!("Failed to list theses: {}", e)))?;
    Ok(Json(theses))
}

pub async fn create_thesis(
    State(state): State<AppState>,
    Json(request): Json<NewThesis>,
) -> Result<Json<Thesis>, ApiError> {
    let conn = state.db.get()?;

    let thesis = ThesisRepo::new(&conn)
        .insert(&request)
        .map_err(|e| ApiError::new(format!("Failed to register thesis: {}", e)))?;

    info!("Registered thesis {}: {}", thesis.thesis_no, thesis.title);
    Ok(Json(thesis))
}

pub async fn delete_thesis(
    State(state): State<AppState>,
    Path(thesis_no): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let conn = state.db.get()?;

    let removed = ThesisRepo::new(&conn)
        .delete(thesis_no)
        .map_err(|e| ApiError::new(format!("Failed to delete thesis: {}", e)))?;

    if removed {
        info!("Deleted thesis {}", thesis_no);
    }

    // Deleting an unknown number still reports success.
    Ok(Json(MessageResponse {
        message: "Thesis deleted".to_string(),
    }))
}
