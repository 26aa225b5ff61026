//! JWT claims and HS256 signing/validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Claims carried by an access token from the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the provider's user id.
    pub sub: String,
    /// The user's email address.
    pub email: String,
    /// Issuer, checked against the configured trusted list.
    pub iss: String,
    /// Expiry, unix seconds.
    pub exp: i64,
}

/// Validates a token's signature, expiry, and issuer.
pub fn validate_token(token: &str, secret: &str, trusted_issuers: &[String]) -> AuthResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    let claims = data.claims;
    if !trusted_issuers.iter().any(|iss| iss == &claims.iss) {
        return Err(AuthError::UntrustedIssuer(claims.iss));
    }
    if claims.sub.is_empty() {
        return Err(AuthError::MissingClaim("sub".to_string()));
    }
    Ok(claims)
}

/// Signs a token the way the identity provider would.
///
/// Used by integration tests and local development; the production issuer
/// is external.
pub fn sign_token(
    user_id: &str,
    email: &str,
    issuer: &str,
    secret: &str,
) -> AuthResult<String> {
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iss: issuer.to_string(),
        exp: (Utc::now() + Duration::hours(12)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))
}
