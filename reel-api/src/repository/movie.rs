//! Movie Repository
//!
//! Handles all database operations on the `movie` table.

use reel_core::domain::movie::Movie;
use reel_core::dto::movie::{MovieDetails, MovieName};
use sqlx::SqlitePool;

/// List the names of every movie
pub async fn list_names(pool: &SqlitePool) -> Result<Vec<MovieName>, sqlx::Error> {
    let names = sqlx::query_scalar::<_, Option<String>>("SELECT movie_name FROM movie")
        .fetch_all(pool)
        .await?;

    Ok(names.into_iter().map(MovieName::from).collect())
}

/// Insert a movie and return the id the store generated for it
pub async fn create(pool: &SqlitePool, req: &MovieDetails) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO movie (director_id, movie_name, lead_actor)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(req.director_id)
    .bind(&req.movie_name)
    .bind(&req.lead_actor)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Find a movie by ID
pub async fn find_by_id(pool: &SqlitePool, movie_id: i64) -> Result<Option<Movie>, sqlx::Error> {
    let row = sqlx::query_as::<_, MovieRow>(
        r#"
        SELECT movie_id, director_id, movie_name, lead_actor
        FROM movie
        WHERE movie_id = ?
        "#,
    )
    .bind(movie_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Overwrite the three mutable fields of a movie
pub async fn update(
    pool: &SqlitePool,
    movie_id: i64,
    req: &MovieDetails,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE movie
        SET director_id = ?, movie_name = ?, lead_actor = ?
        WHERE movie_id = ?
        "#,
    )
    .bind(req.director_id)
    .bind(&req.movie_name)
    .bind(&req.lead_actor)
    .bind(movie_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a movie by ID
pub async fn delete(pool: &SqlitePool, movie_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM movie WHERE movie_id = ?")
        .bind(movie_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// List the names of the movies made by one director
pub async fn list_names_by_director(
    pool: &SqlitePool,
    director_id: i64,
) -> Result<Vec<MovieName>, sqlx::Error> {
    let names =
        sqlx::query_scalar::<_, Option<String>>("SELECT movie_name FROM movie WHERE director_id = ?")
            .bind(director_id)
            .fetch_all(pool)
            .await?;

    Ok(names.into_iter().map(MovieName::from).collect())
}

// =============================================================================
// Database Row Types
// =============================================================================

// Only the primary key is non-nullable; NULL must reach the caller as null
#[derive(sqlx::FromRow)]
struct MovieRow {
    movie_id: i64,
    director_id: Option<i64>,
    movie_name: Option<String>,
    lead_actor: Option<String>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            movie_id: row.movie_id,
            director_id: row.director_id,
            movie_name: row.movie_name,
            lead_actor: row.lead_actor,
        }
    }
}
