//! Catalog error responses
//!
//! Every failure leaves a handler as `{"error": message}` JSON. Store errors
//! are logged and answered with a fixed 500 body so SQL details never reach
//! the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::director::DirectorError;
use crate::service::movie::MovieError;

pub const MOVIE_NOT_FOUND: &str = "Movie not found";
pub const NO_MOVIES_FOUND: &str = "No Movies Found for this Director";
const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
    BadRequest(&'static str),
    DatabaseError(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DatabaseError(err) => {
                tracing::error!("Store query failed: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound(_) => ApiError::NotFound(MOVIE_NOT_FOUND),
            MovieError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

impl From<DirectorError> for ApiError {
    fn from(err: DirectorError) -> Self {
        match err {
            DirectorError::NoMovies(_) => ApiError::NotFound(NO_MOVIES_FOUND),
            DirectorError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
