//! Storage module for SQLite database operations
//!
//! This module provides:
//! - Pooled connection management and schema migrations
//! - Repository pattern implementations for all entities
//! - The dynamic search-filter builder

pub mod db;
pub mod institute_repo;
pub mod lookup_repo;
pub mod person_repo;
pub mod search;
pub mod thesis_repo;
pub mod university_repo;

pub use db::{open_pool, DatabaseError, DbPool};
pub use institute_repo::InstituteRepo;
pub use lookup_repo::{LookupKind, LookupRepo};
pub use person_repo::PersonRepo;
pub use search::SearchFilters;
pub use thesis_repo::ThesisRepo;
pub use university_repo::UniversityRepo;
