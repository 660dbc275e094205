//! Director API Handlers
//!
//! Read-only director endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use reel_core::domain::director::Director;
use reel_core::dto::movie::MovieName;
use sqlx::SqlitePool;

use crate::api::error::ApiResult;
use crate::service::director_service;

/// GET /directors
/// List all directors
pub async fn list_directors(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<Director>>> {
    tracing::debug!("Listing all directors");

    let directors = director_service::list_directors(&pool).await?;

    Ok(Json(directors))
}

/// GET /directors/{director_id}/movies
/// List the movie names of one director
pub async fn list_director_movies(
    State(pool): State<SqlitePool>,
    Path(director_id): Path<i64>,
) -> ApiResult<Json<Vec<MovieName>>> {
    tracing::debug!("Listing movies of director: {}", director_id);

    let movies = director_service::list_director_movies(&pool, director_id).await?;

    Ok(Json(movies))
}
