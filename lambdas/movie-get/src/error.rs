use aws_sdk_dynamodb::error::DisplayErrorContext;
use lambda_http::{Body, Response};
use repository::error::RepositoryError;
use response::{not_found, server_error};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieGetError {
    #[error("`movieId` is missing in `pathParameters` or is not a number")]
    MissingMovieId,
    #[error("there is no movie with id {0}")]
    InvalidMovieId(i64),
    #[error("lambda is misconfigured")]
    Configuration(#[source] RepositoryError),
    #[error("DynamoDB request failed")]
    Upstream(#[source] RepositoryError),
    #[error("stored item could not be read")]
    Unmarshall(#[source] RepositoryError),
    #[error("response could not be serialized")]
    Serialization(#[from] serde_json::Error),
}

impl MovieGetError {
    pub fn kind(&self) -> &'static str {
        match self {
            MovieGetError::MissingMovieId => "input",
            MovieGetError::InvalidMovieId(_) => "not_found",
            MovieGetError::Configuration(_) => "configuration",
            MovieGetError::Upstream(_) => "upstream",
            MovieGetError::Unmarshall(_) | MovieGetError::Serialization(_) => "serialization",
        }
    }

    pub fn into_response(self) -> Response<Body> {
        match self {
            MovieGetError::MissingMovieId => {
                tracing::info!(kind = self.kind(), "{}", self);
                not_found("Missing movie Id")
            }
            MovieGetError::InvalidMovieId(_) => {
                tracing::info!(kind = self.kind(), "{}", self);
                not_found("Invalid movie Id")
            }
            error => {
                let kind = error.kind();
                let message = DisplayErrorContext(error).to_string();
                tracing::error!(kind, error = %message, "movie lookup failed");
                server_error(json!({ "kind": kind, "message": message }))
            }
        }
    }
}

impl From<RepositoryError> for MovieGetError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::MissingTable(_) => MovieGetError::Configuration(error),
            RepositoryError::GetItem { .. } | RepositoryError::Query { .. } => {
                MovieGetError::Upstream(error)
            }
            RepositoryError::Item { .. } => MovieGetError::Unmarshall(error),
        }
    }
}
