//! Service Module
//!
//! Business logic layer for the catalog API.
//! Services turn empty results and zero-row writes into typed errors.

pub mod director;
pub mod movie;

// Re-export for convenience
pub use director as director_service;
pub use movie as movie_service;
