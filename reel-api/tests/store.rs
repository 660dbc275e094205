//! Integration tests for opening and checking the store file.

mod common;

use common::{DIRECTOR_TABLE, MOVIE_TABLE, TestStore};
use reel_api::db::{self, DbError};

#[tokio::test]
async fn open_store_accepts_expected_layout() {
    let store = TestStore::with_ddl(&format!("{DIRECTOR_TABLE}{MOVIE_TABLE}")).await;

    let pool = db::open_store(store.path()).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movie")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn open_store_never_creates_the_file() {
    let store = TestStore::with_ddl(DIRECTOR_TABLE).await;
    let missing = store.missing_file();

    let result = db::open_store(&missing).await;
    assert!(matches!(result, Err(DbError::Open { .. })));
    assert!(!missing.exists());
}

#[tokio::test]
async fn open_store_rejects_missing_movie_table() {
    let store = TestStore::with_ddl(DIRECTOR_TABLE).await;

    let result = db::open_store(store.path()).await;
    assert!(matches!(result, Err(DbError::Schema { table: "movie", .. })));
}

#[tokio::test]
async fn open_store_rejects_missing_director_table() {
    let store = TestStore::with_ddl(MOVIE_TABLE).await;

    let result = db::open_store(store.path()).await;
    assert!(matches!(result, Err(DbError::Schema { table: "director", .. })));
}

#[tokio::test]
async fn open_store_rejects_missing_column() {
    let ddl = r#"
        CREATE TABLE director (director_id INTEGER PRIMARY KEY, director_name TEXT);
        CREATE TABLE movie (movie_id INTEGER PRIMARY KEY, movie_name TEXT, lead_actor TEXT);
    "#;
    let store = TestStore::with_ddl(ddl).await;

    let result = db::open_store(store.path()).await;
    assert!(matches!(result, Err(DbError::Schema { table: "movie", .. })));
}
