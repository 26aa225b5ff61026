//! User endpoint payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agrimandi_commons::{Role, User, UserId};

/// Body of `PUT /users/me`: a partial profile patch. Creates the profile on
/// first call. `verified` and `rating` are server-owned and deliberately
/// absent here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role: Option<Role>,
}

impl UpdateProfileRequest {
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(location) = self.location {
            user.location = location;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
    }

    /// Materializes a fresh profile for a caller who has none yet.
    pub fn into_new_profile(self, user_id: UserId, email: String) -> User {
        let mut user = User {
            id: user_id,
            email,
            name: String::new(),
            role: Role::Buyer,
            phone: String::new(),
            location: String::new(),
            verified: false,
            rating: 0.0,
            created_at: Utc::now(),
        };
        self.apply(&mut user);
        user
    }
}

/// What `GET /users/me` returns: the stored profile, or a bare identity
/// fallback when no profile record exists yet.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProfileView {
    Full(User),
    Fallback { id: UserId, email: String },
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: ProfileView,
}

/// Redacted projection for `GET /users/{id}`: public data only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    pub location: String,
    pub verified: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            location: user.location,
            verified: user.verified,
            rating: user.rating,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PublicProfileResponse {
    pub user: PublicProfile,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}
