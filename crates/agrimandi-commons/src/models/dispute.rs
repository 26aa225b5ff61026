//! Dispute records raised against orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{DisputeId, OrderId, UserId};

/// Resolution state of a dispute. Only admins move it past `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeStatus {
    Open,
    Resolved,
    Rejected,
}

/// A dispute raised by one party of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: DisputeId,
    pub order_id: OrderId,
    pub raised_by: UserId,
    pub raised_by_name: String,
    pub reason: String,
    #[serde(default)]
    pub description: String,
    pub status: DisputeStatus,
    pub created_at: DateTime<Utc>,
}
