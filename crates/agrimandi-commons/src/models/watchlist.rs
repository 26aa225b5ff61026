//! Watchlist items, scoped per user through the storage key itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{UserId, WatchId};
use crate::storage_key::StorageKey;

/// What a watchlist item tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchKind {
    Listing,
    Supplier,
    Crop,
}

/// Composite storage key `{userId}:{watchId}`.
///
/// Ownership is structural: handlers only ever build keys from the
/// authenticated caller's id, so one user's items are unreachable from
/// another user's requests by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistKey {
    pub user_id: UserId,
    pub watch_id: WatchId,
}

impl WatchlistKey {
    pub fn new(user_id: UserId, watch_id: WatchId) -> Self {
        Self { user_id, watch_id }
    }

    /// Prefix covering one user's entire watchlist.
    pub fn user_prefix(user_id: &UserId) -> Vec<u8> {
        format!("{}:", user_id).into_bytes()
    }
}

impl StorageKey for WatchlistKey {
    fn storage_key(&self) -> Vec<u8> {
        format!("{}:{}", self.user_id, self.watch_id).into_bytes()
    }
}

/// One tracked listing, supplier, or crop with an optional target price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: WatchId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: WatchKind,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub mandi: Option<String>,
    #[serde(default)]
    pub target_price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl WatchlistItem {
    pub fn key(&self) -> WatchlistKey {
        WatchlistKey::new(self.user_id.clone(), self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type() {
        let item = WatchlistItem {
            id: WatchId::new("w1"),
            user_id: UserId::new("u1"),
            kind: WatchKind::Crop,
            item_id: None,
            crop: Some("Wheat".to_string()),
            mandi: None,
            target_price: Some(21.0),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "crop");
    }

    #[test]
    fn test_user_prefix_scopes_keys() {
        let key = WatchlistKey::new(UserId::new("u1"), WatchId::new("w1"));
        assert!(key
            .storage_key()
            .starts_with(&WatchlistKey::user_prefix(&UserId::new("u1"))));
        assert!(!key
            .storage_key()
            .starts_with(&WatchlistKey::user_prefix(&UserId::new("u2"))));
    }
}
