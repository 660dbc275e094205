//! Shared fixtures for the API integration tests.
//!
//! Each test gets its own SQLite file in a temporary directory, laid out
//! like the production store and seeded with a small catalog.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub const DIRECTOR_TABLE: &str = r#"
CREATE TABLE director (
    director_id INTEGER PRIMARY KEY,
    director_name TEXT NOT NULL
);
"#;

pub const MOVIE_TABLE: &str = r#"
CREATE TABLE movie (
    movie_id INTEGER PRIMARY KEY AUTOINCREMENT,
    director_id INTEGER NOT NULL,
    movie_name TEXT NOT NULL,
    lead_actor TEXT NOT NULL
);
"#;

/// Directors 1 and 2 have movies, director 3 has none.
pub const SEED_DATA: &str = r#"
INSERT INTO director (director_id, director_name) VALUES
    (1, 'Director One'),
    (2, 'Director Two'),
    (3, 'Director Three');

INSERT INTO movie (director_id, movie_name, lead_actor) VALUES
    (1, 'Movie A', 'Actor A'),
    (1, 'Movie B', 'Actor B'),
    (2, 'Movie C', 'Actor C');
"#;

/// A store file that lives as long as this value
pub struct TestStore {
    _dir: TempDir,
    path: PathBuf,
}

impl TestStore {
    /// Create a store file by running `ddl` against a fresh database
    pub async fn with_ddl(ddl: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moviesData.db");

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let seed_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        sqlx::raw_sql(ddl).execute(&seed_pool).await.unwrap();
        seed_pool.close().await;

        Self { _dir: dir, path }
    }

    /// The full catalog layout with seed rows
    pub async fn seeded() -> Self {
        Self::with_ddl(&format!("{DIRECTOR_TABLE}{MOVIE_TABLE}{SEED_DATA}")).await
    }

    /// A path inside the temporary directory where no file exists
    pub fn missing_file(&self) -> PathBuf {
        self.path.with_file_name("absent.db")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Seed a store and open it the way the server does
pub async fn seeded_pool() -> (TestStore, SqlitePool) {
    let store = TestStore::seeded().await;
    let pool = reel_api::db::open_store(store.path()).await.unwrap();
    (store, pool)
}

pub fn build_test_app(pool: SqlitePool) -> NormalizePath<Router> {
    reel_api::api::create_router(pool)
}

pub async fn send(
    app: NormalizePath<Router>,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: NormalizePath<Router>, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
