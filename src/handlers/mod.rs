//! HTTP handlers for the record service.

pub mod institutes;
pub mod lookups;
pub mod people;
pub mod search;
pub mod theses;
pub mod universities;

/// Success-shaped response for reference-entity deletions.
#[derive(serde::Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
