//! Shared helpers for the API integration tests.

use std::sync::Arc;

use actix_web::web;

use agrimandi_api::AppState;
use agrimandi_auth::sign_token;
use agrimandi_commons::{partitions, Role, User, UserId};
use agrimandi_configs::AuthSettings;
use agrimandi_store::{EntityStore, MemoryBackend, StorageBackend};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_ISSUER: &str = "agrimandi-test";

/// Fresh in-memory application state with every partition present.
pub fn test_state() -> web::Data<AppState> {
    let backend: Arc<dyn StorageBackend> =
        Arc::new(MemoryBackend::with_partitions(&partitions::ALL));
    let auth = AuthSettings {
        jwt_secret: TEST_SECRET.to_string(),
        trusted_issuers: vec![TEST_ISSUER.to_string()],
    };
    web::Data::new(AppState::new(backend, &auth))
}

/// A Bearer token the test verifier accepts.
pub fn token_for(user_id: &str) -> String {
    sign_token(
        user_id,
        &format!("{}@example.com", user_id),
        TEST_ISSUER,
        TEST_SECRET,
    )
    .expect("token signing failed")
}

/// `Authorization` header value for a user.
pub fn bearer(user_id: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token_for(user_id)))
}

/// Stores a profile record directly, bypassing the HTTP layer.
pub fn seed_user(state: &web::Data<AppState>, id: &str, name: &str, role: Role) {
    let user = User {
        id: UserId::new(id),
        email: format!("{}@example.com", id),
        name: name.to_string(),
        role,
        phone: String::new(),
        location: String::new(),
        verified: false,
        rating: 0.0,
        created_at: chrono::Utc::now(),
    };
    state.users.put(&user.id.clone(), &user).unwrap();
}
