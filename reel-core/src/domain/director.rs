//! Director domain types

use serde::{Deserialize, Serialize};

/// A director. Read-only from the catalog's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub director_id: i64,
    pub director_name: Option<String>,
}
