//! Filter-driven thesis search endpoint

use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::models::ThesisSearchResult;
use crate::state::AppState;
use crate::storage::{SearchFilters, ThesisRepo};

/// GET /api/search - conjunction of whichever filters were supplied,
/// joined with reference names, newest year first.
pub async fn search_theses(
    State(state): State<AppState>,
    Query(filters): Query<SearchFilters>,
) -> Result<Json<Vec<ThesisSearchResult>>, ApiError> {
    let conn = state.db.get()?;

    let results = ThesisRepo::new(&conn)
        .search(&filters)
        .map_err(|e| ApiError::new(format!("Search failed: {}", e)))?;
    Ok(Json(results))
}
