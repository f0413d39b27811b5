//! Credential ports: session tokens and password hashing.

use uuid::Uuid;

use crate::domain::Identity;

/// Session token service.
///
/// Tokens are stateless: verification is a pure check against the shared secret
/// and never touches the user store. Resolving the identity to a stored user is
/// a separate step owned by the caller.
pub trait TokenService: Send + Sync {
    /// Mint a token for a user that just proved its credentials.
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError>;

    /// Validate and decode a raw bearer token.
    fn verify(&self, token: &str) -> Result<Identity, AuthError>;

    /// Token lifetime in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("token invalid")]
    InvalidToken(String),

    #[error("token expired")]
    ExpiredToken,

    /// The token verified but carries no subject claim.
    #[error("token invalid")]
    MissingSubject,

    /// The token verified but its subject no longer resolves to a stored user.
    #[error("token invalid")]
    UnknownSubject,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("Hashing error: {0}")]
    Hashing(String),
}
