//! Produce listing records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ListingId, UserId};

/// Publication status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Published,
    Pending,
    Closed,
}

/// A supplier's produce listing.
///
/// The `supplier_*` fields are a snapshot of the supplier's profile taken at
/// creation time, not a live join. They go stale if the profile changes
/// later; `supplier_id` itself is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub supplier_id: UserId,
    pub supplier_name: String,
    pub supplier_rating: f64,
    pub supplier_verified: bool,
    pub supplier_location: String,
    pub crop: String,
    pub grade: String,
    pub quantity: u64,
    pub unit: String,
    pub price_per_unit: f64,
    pub mandi: String,
    #[serde(default)]
    pub packaging: String,
    pub harvest_date: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub certification: String,
    #[serde(default)]
    pub description: String,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ListingStatus::Published).unwrap(),
            "\"published\""
        );
        let status: ListingStatus = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(status, ListingStatus::Closed);
    }
}
