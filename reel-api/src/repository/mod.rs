//! Repository Module
//!
//! Data access layer for the catalog API.
//! Each repository holds the SQL statements for one store table.

pub mod director;
pub mod movie;

// Re-export for convenience
pub use director as director_repository;
pub use movie as movie_repository;
