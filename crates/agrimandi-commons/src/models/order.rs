//! Order records and the status state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ListingId, OrderId, UserId};

/// Lifecycle state of an order.
///
/// Orders move forward through inquiry → negotiation → confirmed → shipped →
/// delivered; `cancelled` is reachable from any state before delivery.
/// Negotiation may be skipped when the buyer accepts the listed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Inquiry,
    Negotiation,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether a transition from `self` to `next` is allowed.
    ///
    /// A no-op transition (same status) is always allowed so that patches
    /// which merely restate the current status don't fail.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        if self == next {
            return true;
        }
        match (self, next) {
            (Inquiry, Negotiation) | (Inquiry, Confirmed) => true,
            (Negotiation, Confirmed) => true,
            (Confirmed, Shipped) => true,
            (Shipped, Delivered) => true,
            (Inquiry | Negotiation | Confirmed | Shipped, Cancelled) => true,
            _ => false,
        }
    }
}

/// An order (starting life as an inquiry) between a buyer and a supplier.
///
/// `total_amount` is derived once at creation from the listing's price and
/// the requested quantity; later listing price changes never recompute it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub listing_id: ListingId,
    pub buyer_id: UserId,
    pub buyer_name: String,
    pub supplier_id: UserId,
    pub crop: String,
    pub quantity: u64,
    pub unit: String,
    pub unit_price: f64,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions() {
        use OrderStatus::*;
        assert!(Inquiry.can_transition_to(Negotiation));
        assert!(Inquiry.can_transition_to(Confirmed));
        assert!(Negotiation.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(Shipped));
        assert!(Shipped.can_transition_to(Delivered));
    }

    #[test]
    fn test_cancellation_only_before_delivery() {
        use OrderStatus::*;
        assert!(Inquiry.can_transition_to(Cancelled));
        assert!(Negotiation.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(Shipped.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Inquiry));
    }

    #[test]
    fn test_no_backwards_or_skipping_transitions() {
        use OrderStatus::*;
        assert!(!Inquiry.can_transition_to(Shipped));
        assert!(!Confirmed.can_transition_to(Inquiry));
        assert!(!Shipped.can_transition_to(Confirmed));
        assert!(!Delivered.can_transition_to(Shipped));
    }

    #[test]
    fn test_same_status_is_a_noop() {
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Confirmed));
    }
}
