//! Director Service
//!
//! Director listing and per-director movie lookups.

use reel_core::domain::director::Director;
use reel_core::dto::movie::MovieName;
use sqlx::SqlitePool;

use crate::repository::{director_repository, movie_repository};

/// Service error type
#[derive(Debug)]
pub enum DirectorError {
    /// The director has no movies in the store
    NoMovies(i64),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for DirectorError {
    fn from(err: sqlx::Error) -> Self {
        DirectorError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, DirectorError>;

/// List all directors
pub async fn list_directors(pool: &SqlitePool) -> Result<Vec<Director>> {
    let directors = director_repository::list_all(pool).await?;
    Ok(directors)
}

/// List the movies of one director. An empty result is an error.
pub async fn list_director_movies(pool: &SqlitePool, director_id: i64) -> Result<Vec<MovieName>> {
    let movies = movie_repository::list_names_by_director(pool, director_id).await?;

    if movies.is_empty() {
        return Err(DirectorError::NoMovies(director_id));
    }

    Ok(movies)
}
