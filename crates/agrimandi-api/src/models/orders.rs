//! Order endpoint payloads.

use serde::{Deserialize, Serialize};

use agrimandi_commons::{ListingId, Order, OrderStatus};

use crate::error::{ApiError, ApiResult};

/// Body of `POST /orders`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub listing_id: ListingId,
    pub quantity: u64,
    #[serde(default)]
    pub message: String,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> ApiResult<()> {
        if self.listing_id.as_str().trim().is_empty() || self.quantity == 0 {
            return Err(ApiError::validation("Listing ID and quantity required"));
        }
        Ok(())
    }
}

/// Body of `PATCH /orders/{id}`.
///
/// Status changes are validated against the order state machine; an
/// illegal transition is a 400.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatchRequest {
    pub status: Option<OrderStatus>,
    pub message: Option<String>,
}

impl OrderPatchRequest {
    pub fn apply(self, order: &mut Order) -> ApiResult<()> {
        if let Some(next) = self.status {
            if !order.status.can_transition_to(next) {
                return Err(ApiError::validation(format!(
                    "Invalid status transition from {:?} to {:?}",
                    order.status, next
                )));
            }
            order.status = next;
        }
        if let Some(message) = self.message {
            order.message = message;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}
