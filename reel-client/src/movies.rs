//! Movie-related API endpoints

use crate::CatalogClient;
use crate::error::Result;
use reel_core::domain::movie::Movie;
use reel_core::dto::movie::{MovieDetails, MovieName};

impl CatalogClient {
    // =============================================================================
    // Movie Management
    // =============================================================================

    /// List the names of all movies
    pub async fn list_movies(&self) -> Result<Vec<MovieName>> {
        let url = format!("{}/movies/", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Create a movie
    ///
    /// # Returns
    /// The server's confirmation text
    pub async fn create_movie(&self, req: &MovieDetails) -> Result<String> {
        let url = format!("{}/movies/", self.base_url);
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_text_response(response).await
    }

    /// Get a movie by ID
    pub async fn get_movie(&self, movie_id: i64) -> Result<Movie> {
        let url = format!("{}/movies/{}/", self.base_url, movie_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Replace the director, name and lead actor of a movie
    ///
    /// An unknown ID comes back as a 400 `ApiError`.
    pub async fn update_movie(&self, movie_id: i64, req: &MovieDetails) -> Result<String> {
        let url = format!("{}/movies/{}", self.base_url, movie_id);
        let response = self.client.put(&url).json(req).send().await?;

        self.handle_text_response(response).await
    }

    /// Delete a movie
    pub async fn delete_movie(&self, movie_id: i64) -> Result<String> {
        let url = format!("{}/movies/{}/", self.base_url, movie_id);
        let response = self.client.delete(&url).send().await?;

        self.handle_text_response(response).await
    }
}
