use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Uniform failure envelope: every error path returns this JSON shape.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing url query parameter")]
    MissingParameter,

    #[error("upstream responded with {status}")]
    UpstreamHttp {
        status: StatusCode,
        status_text: String,
    },

    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("route {0} not found")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::MissingParameter => (
                StatusCode::BAD_REQUEST,
                "Missing URL parameter".to_string(),
                "Please provide a URL parameter: /fetch?url=https://example.com".to_string(),
            ),
            AppError::UpstreamHttp {
                status,
                status_text,
            } => (
                status,
                "Failed to fetch data".to_string(),
                format!("Upstream returned {} {}", status.as_u16(), status_text),
            ),
            AppError::UpstreamUnreachable(detail) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to fetch data".to_string(),
                format!("Upstream is not responding: {}", detail),
            ),
            AppError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "Not found".to_string(),
                format!("Route {} not found", path),
            ),
            AppError::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                detail,
            ),
        };

        let body = Json(ErrorResponse { error, message });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // No response at all (timed out or never connected) is a 503;
        // everything else is a local failure.
        if err.is_timeout() || err.is_connect() {
            AppError::UpstreamUnreachable(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
