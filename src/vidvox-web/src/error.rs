//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No URL provided")]
    NoUrlProvided,

    #[error("No video URL")]
    NoVideoUrl,

    #[error("{0}")]
    Failed(String),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NoUrlProvided | ApiError::NoVideoUrl => StatusCode::BAD_REQUEST,
            ApiError::Failed(_) | ApiError::Internal(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NoVideoUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NoUrlProvided.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Failed("x".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
