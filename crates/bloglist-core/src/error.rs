//! Domain-level error types.

use thiserror::Error;

use crate::ports::AuthError;

/// Domain errors - business logic failures.
///
/// Messages double as the `error` field of the JSON body the API returns, so they
/// are phrased for clients.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl DomainError {
    pub fn blog_not_found() -> Self {
        Self::NotFound { entity: "blog" }
    }
}

/// Reasons the ownership guard refuses a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OwnershipError {
    /// No identity is attached to the request.
    #[error("token missing or invalid")]
    Unauthenticated,

    /// The caller is authenticated but does not own the resource.
    #[error("unauthorized action")]
    NotOwner,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
