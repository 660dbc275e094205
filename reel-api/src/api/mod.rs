//! API Module
//!
//! HTTP API layer for the movie catalog.
//! Each submodule handles endpoints for a specific entity.

pub mod director;
pub mod error;
pub mod health;
pub mod movie;

use axum::{Router, routing::get};
use sqlx::SqlitePool;
use tower_http::{normalize_path::NormalizePath, trace::TraceLayer};

/// Create the main API router with all endpoints
///
/// A trailing slash is optional on every route.
pub fn create_router(pool: SqlitePool) -> NormalizePath<Router> {
    let router = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Movie endpoints
        .route(
            "/movies",
            get(movie::list_movies).post(movie::create_movie),
        )
        .route(
            "/movies/{movie_id}",
            get(movie::get_movie)
                .put(movie::update_movie)
                .delete(movie::delete_movie),
        )
        // Director endpoints
        .route("/directors", get(director::list_directors))
        .route(
            "/directors/{director_id}/movies",
            get(director::list_director_movies),
        )
        // Add state and middleware
        .with_state(pool)
        .layer(TraceLayer::new_for_http());

    NormalizePath::trim_trailing_slash(router)
}
