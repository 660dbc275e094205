//! Reel Core
//!
//! Core types shared by the Reel movie catalog services.
//!
//! This crate contains:
//! - Domain types: Catalog entities (Movie, Director)
//! - DTOs: Request and response shapes exchanged over HTTP
//!
//! Every type here serializes with camelCase field names. Storage column
//! names stay snake_case and are mapped by the API's repository layer.

pub mod domain;
pub mod dto;
