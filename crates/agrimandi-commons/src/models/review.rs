//! Review records, keyed under the reviewee for cheap per-user scans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, ReviewId, UserId};
use crate::storage_key::StorageKey;

/// Composite storage key `{revieweeId}:{reviewId}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewKey {
    pub reviewee_id: UserId,
    pub review_id: ReviewId,
}

impl ReviewKey {
    pub fn new(reviewee_id: UserId, review_id: ReviewId) -> Self {
        Self {
            reviewee_id,
            review_id,
        }
    }

    /// Prefix covering every review targeting one user.
    pub fn reviewee_prefix(reviewee_id: &UserId) -> Vec<u8> {
        format!("{}:", reviewee_id).into_bytes()
    }
}

impl StorageKey for ReviewKey {
    fn storage_key(&self) -> Vec<u8> {
        format!("{}:{}", self.reviewee_id, self.review_id).into_bytes()
    }
}

/// A rating left by one party of an order for the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub order_id: OrderId,
    pub reviewer_id: UserId,
    pub reviewer_name: String,
    pub reviewee_id: UserId,
    /// Integer stars in [1, 5].
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn key(&self) -> ReviewKey {
        ReviewKey::new(self.reviewee_id.clone(), self.id.clone())
    }
}
