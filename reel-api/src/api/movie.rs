//! Movie API Handlers
//!
//! HTTP endpoints for movie management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use reel_core::domain::movie::Movie;
use reel_core::dto::movie::{MovieDetails, MovieName};
use sqlx::SqlitePool;

use crate::api::error::{ApiError, ApiResult, MOVIE_NOT_FOUND};
use crate::service::movie_service;

/// GET /movies
/// List all movie names
pub async fn list_movies(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<MovieName>>> {
    tracing::debug!("Listing all movies");

    let movies = movie_service::list_movies(&pool).await?;

    Ok(Json(movies))
}

/// POST /movies
/// Create a new movie
pub async fn create_movie(
    State(pool): State<SqlitePool>,
    Json(req): Json<MovieDetails>,
) -> ApiResult<(StatusCode, &'static str)> {
    tracing::info!("Creating movie: {}", req.movie_name);

    movie_service::create_movie(&pool, req).await?;

    Ok((StatusCode::CREATED, "Movie Successfully Added"))
}

/// GET /movies/{movie_id}
/// Get movie by ID
pub async fn get_movie(
    State(pool): State<SqlitePool>,
    Path(movie_id): Path<i64>,
) -> ApiResult<Json<Movie>> {
    tracing::debug!("Getting movie: {}", movie_id);

    let movie = movie_service::get_movie(&pool, movie_id).await?;

    Ok(Json(movie))
}

/// PUT /movies/{movie_id}
/// Update a movie; an unknown ID is a bad request, not a 404
pub async fn update_movie(
    State(pool): State<SqlitePool>,
    Path(movie_id): Path<i64>,
    Json(req): Json<MovieDetails>,
) -> ApiResult<&'static str> {
    tracing::info!("Updating movie: {}", movie_id);

    movie_service::update_movie(&pool, movie_id, req)
        .await
        .map_err(|e| match e {
            movie_service::MovieError::NotFound(_) => ApiError::BadRequest(MOVIE_NOT_FOUND),
            movie_service::MovieError::DatabaseError(err) => ApiError::DatabaseError(err),
        })?;

    Ok("Movie Details Updated")
}

/// DELETE /movies/{movie_id}
/// Delete a movie
pub async fn delete_movie(
    State(pool): State<SqlitePool>,
    Path(movie_id): Path<i64>,
) -> ApiResult<&'static str> {
    tracing::info!("Deleting movie: {}", movie_id);

    movie_service::delete_movie(&pool, movie_id).await?;

    Ok("Movie Removed")
}
