//! Admin endpoint payloads.

use serde::{Deserialize, Serialize};

use agrimandi_commons::{Order, Role, User};

/// Body of `PATCH /admin/users/{id}`: moderation controls only.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserPatch {
    pub verified: Option<bool>,
    pub role: Option<Role>,
}

impl AdminUserPatch {
    pub fn apply(self, user: &mut User) {
        if let Some(verified) = self.verified {
            user.verified = verified;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
    }
}

/// Aggregates for the admin dashboard, recomputed by full scans on every
/// call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_users: usize,
    pub total_suppliers: usize,
    pub total_buyers: usize,
    pub total_listings: usize,
    pub active_listings: usize,
    pub total_orders: usize,
    pub total_revenue: f64,
    pub total_messages: usize,
    /// Ten most recent orders, newest first.
    pub recent_orders: Vec<Order>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub analytics: Analytics,
}
