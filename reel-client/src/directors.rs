//! Director-related API endpoints

use crate::CatalogClient;
use crate::error::Result;
use reel_core::domain::director::Director;
use reel_core::dto::movie::MovieName;

impl CatalogClient {
    /// List all directors
    pub async fn list_directors(&self) -> Result<Vec<Director>> {
        let url = format!("{}/directors/", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// List the names of the movies made by a director
    ///
    /// A director with no movies comes back as a 404 `ApiError`.
    pub async fn list_director_movies(&self, director_id: i64) -> Result<Vec<MovieName>> {
        let url = format!("{}/directors/{}/movies/", self.base_url, director_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
