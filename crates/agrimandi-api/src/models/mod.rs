//! Request and response models for every endpoint.
//!
//! The source payloads were untyped JSON merges; here each endpoint gets an
//! explicit record, with required fields validated before any record is
//! constructed. Wire names stay camelCase throughout.

pub mod admin;
pub mod disputes;
pub mod listings;
pub mod mandi_rates;
pub mod messages;
pub mod notifications;
pub mod orders;
pub mod reviews;
pub mod users;
pub mod watchlist;

use serde::Serialize;

/// `{"success": true}` acknowledgement for deletions.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
