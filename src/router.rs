//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{institutes, lookups, people, search, theses, universities};
use crate::state::AppState;

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))

        // Theses
        .route("/api/theses", get(theses::list_theses).post(theses::create_thesis))
        .route("/api/theses/{id}", delete(theses::delete_thesis))
        .route("/api/search", get(search::search_theses))

        // People
        .route("/api/people", get(people::list_people).post(people::create_person))
        .route(
            "/api/people/{id}",
            put(people::update_person).delete(people::delete_person),
        )

        // Institutes and universities
        .route(
            "/api/institutes",
            get(institutes::list_institutes).post(institutes::create_institute),
        )
        .route(
            "/api/institutes/{id}",
            put(institutes::update_institute).delete(institutes::delete_institute),
        )
        .route(
            "/api/universities",
            get(universities::list_universities).post(universities::create_university),
        )
        .route(
            "/api/universities/{id}",
            put(universities::update_university)
                .delete(universities::delete_university),
        )

        // Name-only lookup families
        .route("/api/languages", get(lookups::list_languages).post(lookups::create_language))
        .route(
            "/api/languages/{id}",
            put(lookups::update_language).delete(lookups::delete_language),
        )
        .route("/api/types", get(lookups::list_types).post(lookups::create_type))
        .route(
            "/api/types/{id}",
            put(lookups::update_type).delete(lookups::delete_type),
        )
        .route("/api/topics", get(lookups::list_topics).post(lookups::create_topic))
        .route(
            "/api/topics/{id}",
            put(lookups::update_topic).delete(lookups::delete_topic),
        )
        .route("/api/keywords", get(lookups::list_keywords).post(lookups::create_keyword))
        .route(
            "/api/keywords/{id}",
            put(lookups::update_keyword).delete(lookups::delete_keyword),
        )

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "Athenaeum record service is running"
}
