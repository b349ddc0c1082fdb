//! Error handling - maps operation failures to HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::DomainError;
use blog_core::validation::ValidationReport;
use blog_shared::ErrorResponse;

/// Application-level error type.
///
/// Client errors about the id or page carry no body; validation failures
/// carry the validator's report; everything else uses RFC 7807.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Malformed post id: {0}")]
    InvalidId(String),

    #[error("Invalid page: {0}")]
    InvalidPage(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_)
            | AppError::InvalidPage(_)
            | AppError::Validation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());

        match self {
            AppError::InvalidId(_) | AppError::InvalidPage(_) | AppError::NotFound(_) => {
                response.finish()
            }
            AppError::Validation(report) => response.json(report),
            AppError::BadRequest(detail) => response.json(ErrorResponse::bad_request(detail)),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                response.json(ErrorResponse::internal_error().with_detail(detail))
            }
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(report) => AppError::Validation(report),
            DomainError::InvalidPage(raw) => AppError::InvalidPage(raw),
            DomainError::Store(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use blog_core::error::RepoError;

    #[actix_rt::test]
    async fn test_not_found_has_empty_body() {
        let err = AppError::from(DomainError::NotFound {
            entity_type: "Post",
            id: uuid::Uuid::now_v7(),
        });
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(to_bytes(response.into_body()).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_store_error_is_surfaced_as_500() {
        let err = AppError::from(DomainError::Store(RepoError::Query("disk full".to_string())));
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], 500);
        assert!(value["detail"].as_str().unwrap().contains("disk full"));
    }
}
