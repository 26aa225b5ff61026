//! HTTP request identity extraction.
//!
//! Extracts and validates the Bearer token from a request's Authorization
//! header. Read-only: no tokens are issued or refreshed here.

use actix_web::HttpRequest;
use log::debug;

use agrimandi_commons::UserId;

use crate::error::{AuthError, AuthResult};
use crate::token::validate_token;

/// The authenticated caller, as established from a valid token.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: UserId,
    pub email: String,
}

/// Validates Bearer tokens against the identity provider's signing secret.
pub struct IdentityVerifier {
    jwt_secret: String,
    trusted_issuers: Vec<String>,
}

impl IdentityVerifier {
    pub fn new(jwt_secret: impl Into<String>, trusted_issuers: Vec<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            trusted_issuers,
        }
    }

    /// Establishes the caller's identity from the Authorization header.
    pub fn verify_request(&self, req: &HttpRequest) -> AuthResult<Identity> {
        let auth_header = req
            .headers()
            .get("Authorization")
            .ok_or(AuthError::MissingAuthorization)?
            .to_str()
            .map_err(|_| {
                AuthError::MalformedAuthorization(
                    "Authorization header contains invalid characters".to_string(),
                )
            })?;

        let token = auth_header
            .strip_prefix("Bearer")
            .ok_or_else(|| {
                AuthError::MalformedAuthorization(
                    "Authorization header must start with 'Bearer '".to_string(),
                )
            })?
            .trim();
        if token.is_empty() {
            return Err(AuthError::MalformedAuthorization(
                "Bearer token missing".to_string(),
            ));
        }

        let claims = validate_token(token, &self.jwt_secret, &self.trusted_issuers)?;
        debug!("authenticated user {}", claims.sub);

        Ok(Identity {
            user_id: UserId::new(claims.sub),
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::sign_token;
    use actix_web::test::TestRequest;

    const SECRET: &str = "test-secret";

    fn verifier() -> IdentityVerifier {
        IdentityVerifier::new(SECRET, vec!["agrimandi-test".to_string()])
    }

    #[test]
    fn test_valid_bearer_token() {
        let token = sign_token("u1", "u1@example.com", "agrimandi-test", SECRET).unwrap();
        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();

        let identity = verifier().verify_request(&req).unwrap();
        assert_eq!(identity.user_id.as_str(), "u1");
        assert_eq!(identity.email, "u1@example.com");
    }

    #[test]
    fn test_missing_header() {
        let req = TestRequest::default().to_http_request();
        let err = verifier().verify_request(&req).unwrap_err();
        assert!(matches!(err, AuthError::MissingAuthorization));
    }

    #[test]
    fn test_non_bearer_scheme() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_http_request();
        let err = verifier().verify_request(&req).unwrap_err();
        assert!(matches!(err, AuthError::MalformedAuthorization(_)));
    }

    #[test]
    fn test_empty_bearer_token() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer "))
            .to_http_request();
        let err = verifier().verify_request(&req).unwrap_err();
        assert!(matches!(err, AuthError::MalformedAuthorization(_)));
    }
}
