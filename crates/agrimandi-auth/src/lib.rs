//! Identity verification for the marketplace API.
//!
//! Token issuance belongs to the hosted identity provider; this crate only
//! validates the Bearer tokens it signs (HS256) and hands back the caller's
//! identity. Role checks happen in the handlers against the stored user
//! profile, not against token claims.

pub mod error;
pub mod identity;
pub mod token;

pub use error::{AuthError, AuthResult};
pub use identity::{Identity, IdentityVerifier};
pub use token::{sign_token, Claims};
