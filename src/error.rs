use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Message shown when every candidate was filtered out or no seed term matched.
pub const NO_MATCHES_MESSAGE: &str = "No movies found matching your description";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    /// A search completed but nothing survived filtering.
    /// Distinct from `ExternalApi`, which means the catalog could not be reached at all.
    #[error("{0}")]
    NoMatches(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn no_matches() -> Self {
        AppError::NoMatches(NO_MATCHES_MESSAGE.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::NoMatches(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Store(_) | AppError::Serialization(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches_maps_to_not_found() {
        let response = AppError::no_matches().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_external_api_maps_to_bad_gateway() {
        let response = AppError::ExternalApi("catalog down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let response = AppError::InvalidInput("empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
