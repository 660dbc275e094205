//! Movie domain types

use serde::{Deserialize, Serialize};

/// A movie row as exposed over HTTP
///
/// Only the id is guaranteed by the store; the other columns may hold NULL,
/// which is sent as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: i64,
    pub director_id: Option<i64>,
    pub movie_name: Option<String>,
    pub lead_actor: Option<String>,
}
