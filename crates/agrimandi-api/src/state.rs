//! Shared application state handed to every handler.

use std::sync::Arc;

use actix_web::HttpRequest;

use agrimandi_auth::{Identity, IdentityVerifier};
use agrimandi_commons::User;
use agrimandi_configs::AuthSettings;
use agrimandi_store::{EntityStore, StorageBackend};

use crate::error::{ApiError, ApiResult};
use crate::repositories::{
    DisputeStore, ListingStore, MandiRateStore, MessageStore, NotificationStore, OrderStore,
    ReviewStore, UserStore, WatchlistStore,
};

/// Everything the handlers need: the identity verifier plus one typed
/// repository per entity family, all sharing a single storage backend.
pub struct AppState {
    pub verifier: IdentityVerifier,
    pub users: UserStore,
    pub listings: ListingStore,
    pub orders: OrderStore,
    pub rates: MandiRateStore,
    pub messages: MessageStore,
    pub reviews: ReviewStore,
    pub watchlist: WatchlistStore,
    pub notifications: NotificationStore,
    pub disputes: DisputeStore,
}

impl AppState {
    pub fn new(backend: Arc<dyn StorageBackend>, auth: &AuthSettings) -> Self {
        Self {
            verifier: IdentityVerifier::new(
                auth.jwt_secret.clone(),
                auth.trusted_issuers.clone(),
            ),
            users: UserStore::new(backend.clone()),
            listings: ListingStore::new(backend.clone()),
            orders: OrderStore::new(backend.clone()),
            rates: MandiRateStore::new(backend.clone()),
            messages: MessageStore::new(backend.clone()),
            reviews: ReviewStore::new(backend.clone()),
            watchlist: WatchlistStore::new(backend.clone()),
            notifications: NotificationStore::new(backend.clone()),
            disputes: DisputeStore::new(backend),
        }
    }

    /// Establishes the caller's identity, or fails with 401.
    pub fn authenticate(&self, req: &HttpRequest) -> ApiResult<Identity> {
        Ok(self.verifier.verify_request(req)?)
    }

    /// The caller's stored profile, when one exists.
    pub fn profile_of(&self, identity: &Identity) -> ApiResult<Option<User>> {
        Ok(self.users.get(&identity.user_id)?)
    }

    /// Authenticates and requires the caller's profile to carry the admin
    /// role. Callers without a profile are not admins.
    pub fn require_admin(&self, req: &HttpRequest) -> ApiResult<Identity> {
        let identity = self.authenticate(req)?;
        match self.profile_of(&identity)? {
            Some(profile) if profile.is_admin() => Ok(identity),
            _ => Err(ApiError::forbidden("Forbidden - admin only")),
        }
    }
}
