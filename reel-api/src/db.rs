use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::{Path, PathBuf};

/// Probes for the table layout the repositories rely on.
/// Preparing these fails when a table or column is missing.
const EXPECTED_TABLES: [(&str, &str); 2] = [
    (
        "movie",
        "SELECT movie_id, director_id, movie_name, lead_actor FROM movie LIMIT 0",
    ),
    (
        "director",
        "SELECT director_id, director_name FROM director LIMIT 0",
    ),
];

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Failed to open store {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    #[error("Store has no usable `{table}` table: {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Open the existing store file and check its layout
pub async fn open_store(path: &Path) -> Result<SqlitePool, DbError> {
    let pool = connect(path).await?;
    verify_schema(&pool).await?;
    Ok(pool)
}

/// Open the single store connection shared by every handler.
///
/// The file is never created here.
pub async fn connect(path: &Path) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|source| DbError::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub async fn verify_schema(pool: &SqlitePool) -> Result<(), DbError> {
    for (table, probe) in EXPECTED_TABLES {
        sqlx::query(probe)
            .execute(pool)
            .await
            .map_err(|source| DbError::Schema { table, source })?;
    }

    tracing::info!("Store schema verified");
    Ok(())
}
