//! Reel HTTP Client
//!
//! A simple, type-safe HTTP client for the Reel movie catalog API.
//!
//! # Example
//!
//! ```no_run
//! use reel_client::CatalogClient;
//! use reel_core::dto::movie::MovieDetails;
//!
//! #[tokio::main]
//! async fn main() -> reel_client::Result<()> {
//!     let client = CatalogClient::new("http://localhost:3000");
//!
//!     client.create_movie(&MovieDetails {
//!         director_id: 1,
//!         movie_name: "Jurassic Park".to_string(),
//!         lead_actor: "Jeff Goldblum".to_string(),
//!     }).await?;
//!
//!     for movie in client.list_movies().await? {
//!         println!("{}", movie.movie_name.as_deref().unwrap_or("(untitled)"));
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod directors;
mod movies;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the movie catalog API
///
/// Methods are grouped by entity:
/// - Movie management (list, create, get, update, delete)
/// - Director listing and per-director movies
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// Base URL of the API (e.g., "http://localhost:3000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    ///
    /// # Example
    /// ```
    /// use reel_client::CatalogClient;
    ///
    /// let client = CatalogClient::new("http://localhost:3000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new catalog client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize a JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Check the status code and return the plain-text confirmation
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let response = Self::check_status(response).await?;

        Ok(response.text().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::debug!("API answered {}: {}", status, body);

        Err(ClientError::api_error(status.as_u16(), error_message(body)))
    }
}

/// Pull the message out of an `{"error": ...}` body, keeping other bodies as-is
fn error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| json.get("error")?.as_str().map(str::to_string))
        .unwrap_or(body)
}
