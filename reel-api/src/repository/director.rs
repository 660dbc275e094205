//! Director Repository
//!
//! Read-only access to the `director` table.

use reel_core::domain::director::Director;
use sqlx::SqlitePool;

/// List all directors
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
    let rows = sqlx::query_as::<_, DirectorRow>("SELECT director_id, director_name FROM director")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

#[derive(sqlx::FromRow)]
struct DirectorRow {
    director_id: i64,
    director_name: Option<String>,
}

impl From<DirectorRow> for Director {
    fn from(row: DirectorRow) -> Self {
        Director {
            director_id: row.director_id,
            director_name: row.director_name,
        }
    }
}
