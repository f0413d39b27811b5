//! Terminal error mapping: every failure leaves the server as `{ "error": ... }`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use bloglist_core::error::{DomainError, OwnershipError, RepoError};
use bloglist_core::ports::AuthError;
use bloglist_shared::ErrorResponse;

/// Application-level error type, one variant per response status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn unknown_endpoint() -> Self {
        AppError::NotFound("unknown endpoint".to_string())
    }

    pub fn malformatted_id() -> Self {
        AppError::BadRequest("malformatted id".to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
            other => ErrorResponse::new(other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::Conflict(msg) => AppError::BadRequest(msg),
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Auth(e) => e.into(),
            DomainError::Ownership(e) => e.into(),
            DomainError::Repo(e) => e.into(),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Hashing(msg) => AppError::Internal(msg),
            other => AppError::Unauthorized(other.to_string()),
        }
    }
}

impl From<OwnershipError> for AppError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::Unauthenticated => AppError::Unauthorized(err.to_string()),
            OwnershipError::NotOwner => AppError::Forbidden(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::BadRequest(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// JSON extractor config that reports unparsable bodies as `400`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(AppError, StatusCode)> = vec![
            (
                DomainError::Validation("title or url missing".into()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Conflict("expected `username` to be unique".into()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::ExpiredToken.into(), StatusCode::UNAUTHORIZED),
            (
                AuthError::InvalidToken("bad".into()).into(),
                StatusCode::UNAUTHORIZED,
            ),
            (OwnershipError::Unauthenticated.into(), StatusCode::UNAUTHORIZED),
            (OwnershipError::NotOwner.into(), StatusCode::FORBIDDEN),
            (DomainError::blog_not_found().into(), StatusCode::NOT_FOUND),
            (AppError::unknown_endpoint(), StatusCode::NOT_FOUND),
            (
                RepoError::Query("boom".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{err}");
        }
    }

    #[test]
    fn test_messages_are_client_facing() {
        assert_eq!(
            AppError::from(DomainError::blog_not_found()).to_string(),
            "blog not found"
        );
        assert_eq!(
            AppError::from(OwnershipError::NotOwner).to_string(),
            "unauthorized action"
        );
        assert_eq!(
            AppError::from(AuthError::MissingSubject).to_string(),
            "token invalid"
        );
        assert_eq!(
            AppError::from(AuthError::ExpiredToken).to_string(),
            "token expired"
        );
    }
}
