//! Movie DTOs

use serde::{Deserialize, Serialize};

/// Body of a create or update request
///
/// The three mutable movie fields. The id is generated by the store on
/// create and taken from the path on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub director_id: i64,
    pub movie_name: String,
    pub lead_actor: String,
}

/// A movie listed by name only. A NULL name is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieName {
    pub movie_name: Option<String>,
}

impl From<String> for MovieName {
    fn from(movie_name: String) -> Self {
        Self {
            movie_name: Some(movie_name),
        }
    }
}

impl From<Option<String>> for MovieName {
    fn from(movie_name: Option<String>) -> Self {
        Self { movie_name }
    }
}
