//! Core domain types
//!
//! The two catalog entities. Both are shared between the API (which reads
//! them from the store) and the client (which decodes them from responses).

pub mod director;
pub mod movie;
