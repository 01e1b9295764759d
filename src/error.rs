use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Locked")]
    Locked,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Not found")]
    NotFound,

    #[error("Review already moderated")]
    AlreadyModerated,

    #[error("Rate limit exceeded")]
    RateLimited { retry_after_secs: i64 },
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::InvalidInput(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Locked => (StatusCode::UNAUTHORIZED, "Locked"),
            AppError::WrongPassword => (StatusCode::UNAUTHORIZED, "Wrong password"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            AppError::AlreadyModerated => (StatusCode::CONFLICT, "Review already moderated"),
            AppError::RateLimited { retry_after_secs } => {
                let body = Json(json!({ "error": "Too many attempts" }));
                return (
                    StatusCode::TOO_MANY_REQUESTS,
                    [(header::RETRY_AFTER, retry_after_secs.to_string())],
                    body,
                )
                    .into_response();
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_sets_retry_after() {
        let response = AppError::RateLimited {
            retry_after_secs: 60,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            "60"
        );
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::InvalidInput("Missing fields".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_locked_maps_to_unauthorized() {
        let response = AppError::Locked.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
