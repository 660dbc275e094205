//! Data Transfer Objects
//!
//! Request bodies and trimmed-down response shapes used by the catalog API.

pub mod movie;
