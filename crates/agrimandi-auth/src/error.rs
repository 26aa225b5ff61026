//! Authentication error types.

use thiserror::Error;

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Failures while establishing the caller's identity.
///
/// Every variant maps to a 401 at the HTTP layer; the distinction exists
/// for logging and tests.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authorization header is required. Use 'Authorization: Bearer <token>'")]
    MissingAuthorization,

    #[error("Malformed Authorization header: {0}")]
    MalformedAuthorization(String),

    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    #[error("Token issuer '{0}' is not trusted")]
    UntrustedIssuer(String),

    #[error("Token is missing required claim '{0}'")]
    MissingClaim(String),
}
