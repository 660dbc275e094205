//! Movie Service
//!
//! Business logic for movie management.

use reel_core::domain::movie::Movie;
use reel_core::dto::movie::{MovieDetails, MovieName};
use sqlx::SqlitePool;

use crate::repository::movie_repository;

/// Service error type
#[derive(Debug)]
pub enum MovieError {
    NotFound(i64),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for MovieError {
    fn from(err: sqlx::Error) -> Self {
        MovieError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, MovieError>;

/// List every movie by name
pub async fn list_movies(pool: &SqlitePool) -> Result<Vec<MovieName>> {
    let movies = movie_repository::list_names(pool).await?;
    Ok(movies)
}

/// Create a new movie, returning its generated ID
pub async fn create_movie(pool: &SqlitePool, req: MovieDetails) -> Result<i64> {
    let movie_id = movie_repository::create(pool, &req).await?;

    tracing::info!("Movie created: {} ({})", req.movie_name, movie_id);

    Ok(movie_id)
}

/// Get a movie by ID
pub async fn get_movie(pool: &SqlitePool, movie_id: i64) -> Result<Movie> {
    let movie = movie_repository::find_by_id(pool, movie_id)
        .await?
        .ok_or(MovieError::NotFound(movie_id))?;

    Ok(movie)
}

/// Update a movie. Fails with `NotFound` when no row was changed.
pub async fn update_movie(pool: &SqlitePool, movie_id: i64, req: MovieDetails) -> Result<()> {
    let updated = movie_repository::update(pool, movie_id, &req).await?;

    if !updated {
        return Err(MovieError::NotFound(movie_id));
    }

    tracing::info!("Movie updated: {}", movie_id);

    Ok(())
}

/// Delete a movie
pub async fn delete_movie(pool: &SqlitePool, movie_id: i64) -> Result<()> {
    let deleted = movie_repository::delete(pool, movie_id).await?;

    if !deleted {
        return Err(MovieError::NotFound(movie_id));
    }

    tracing::info!("Movie deleted: {}", movie_id);

    Ok(())
}
