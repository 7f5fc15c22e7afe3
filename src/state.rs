//! Shared application state for the record service.

use crate::storage::DbPool;

/// Shared state injected into every Axum handler.
///
/// The pool is the only process-wide resource; each request checks out
/// one connection and returns it when the handler finishes.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}
