//! Reel API
//!
//! HTTP gateway over the movie catalog store.
//!
//! Architecture:
//! - Configuration: Listening address and store location, from environment or defaults
//! - Db: Opens the single store connection and checks the expected table layout
//! - Repositories: One function per SQL statement
//! - Services: Not-found and rows-affected rules on top of the repositories
//! - Api: axum handlers and error-to-response mapping

pub mod api;
pub mod config;
pub mod db;
pub mod repository;
pub mod service;

use axum::{ServiceExt, extract::Request};
use sqlx::SqlitePool;
use tokio::net::TcpListener;

/// Serve the catalog API on an already bound listener until the server stops
pub async fn serve(listener: TcpListener, pool: SqlitePool) -> std::io::Result<()> {
    let app = api::create_router(pool);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await
}
