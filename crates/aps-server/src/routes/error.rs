//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use aps::{DomainError, FormErrors};

use crate::models::{ErrorResponse, ValidationErrorResponse};

/// Errors returned by route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submitted form did not validate
    #[error("form validation failed: {0}")]
    InvalidForm(FormErrors),

    /// The request body could not be decoded
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Never exposed to clients
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidForm(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidForm(errors) => Self::InvalidForm(errors),
            DomainError::NotFound { entity_type, id } => {
                tracing::warn!("{} {} not found", entity_type, id);
                Self::NotFound(format!("{} not found", entity_type))
            }
            DomainError::Validation(msg) => Self::BadRequest(msg),
            other @ (DomainError::Repository(_) | DomainError::ExternalService(_)) => {
                Self::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::InvalidForm(errors) => {
                (status, Json(ValidationErrorResponse::from(errors))).into_response()
            }
            Self::BadRequest(error) | Self::NotFound(error) => {
                (status, Json(ErrorResponse { error })).into_response()
            }
            Self::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                (
                    status,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::InvalidForm(FormErrors::single("email", "bad")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_domain_error() {
        let not_found: ApiError = DomainError::not_found("Character", 9).into();
        assert!(matches!(not_found, ApiError::NotFound(ref msg) if msg == "Character not found"));

        let repo: ApiError = DomainError::Repository("pool timed out".into()).into();
        assert!(matches!(repo, ApiError::Internal(_)));

        let external: ApiError = DomainError::ExternalService("down".into()).into();
        assert!(matches!(external, ApiError::Internal(_)));
    }
}
