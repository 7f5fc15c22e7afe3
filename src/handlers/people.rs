//! Person management handlers

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::models::{NewPerson, Person};
use crate::state::AppState;
use crate::storage::PersonRepo;

use super::DeleteResponse;

pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    let conn = state.db.get()?;

    let people = PersonRepo::new(&conn)
        .list()
        .map_err(|e| ApiError::new(format!("Failed to list people: {}", e)))?;
    Ok(Json(people))
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<NewPerson>,
) -> Result<Json<Person>, ApiError> {
    let conn = state.db.get()?;

    let person = PersonRepo::new(&conn)
        .create(&request)
        .map_err(|e| ApiError::new(format!("Failed to create person: {}", e)))?;

    info!(
        "Created person {} {} ({})",
        person.first_name, person.last_name, person.person_id
    );
    Ok(Json(person))
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
    Json(request): Json<NewPerson>,
) -> Result<Json<Option<Person>>, ApiError> {
    let conn = state.db.get()?;

    let person = PersonRepo::new(&conn)
        .update(person_id, &request)
        .map_err(|e| ApiError::new(format!("Failed to update person: {}", e)))?;

    if person.is_some() {
        info!("Updated person {}", person_id);
    }
    Ok(Json(person))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let conn = state.db.get()?;

    let deleted = PersonRepo::new(&conn)
        .delete(person_id)
        .map_err(|e| ApiError::new(format!("Failed to delete person: {}", e)))?;

    if deleted {
        info!("Deleted person {}", person_id);
    }
    Ok(Json(DeleteResponse { deleted }))
}
