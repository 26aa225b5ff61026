//! User profile records and roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Marketplace role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Supplier,
    Buyer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Supplier => "supplier",
            Role::Buyer => "buyer",
            Role::Admin => "admin",
        }
    }
}

/// A user profile, keyed by the identity provider's user id.
///
/// `rating` is a derived value: the arithmetic mean of all reviews targeting
/// this user, rewritten whenever a review is submitted. It can briefly lag
/// behind the review set under concurrent submissions (last write wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    pub verified: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this user may access `/admin/*` operations.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
