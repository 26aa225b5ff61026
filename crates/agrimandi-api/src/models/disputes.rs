//! Dispute endpoint payloads.

use serde::{Deserialize, Serialize};

use agrimandi_commons::{Dispute, DisputeStatus, OrderId};

use crate::error::{ApiError, ApiResult};

/// Body of `POST /disputes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDisputeRequest {
    pub order_id: OrderId,
    pub reason: String,
    #[serde(default)]
    pub description: String,
}

impl CreateDisputeRequest {
    pub fn validate(&self) -> ApiResult<()> {
        if self.order_id.as_str().trim().is_empty() || self.reason.trim().is_empty() {
            return Err(ApiError::validation("Order ID and reason required"));
        }
        Ok(())
    }
}

/// Body of `PATCH /disputes/{id}`; admin only.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputePatchRequest {
    pub status: Option<DisputeStatus>,
    pub description: Option<String>,
}

impl DisputePatchRequest {
    pub fn apply(self, dispute: &mut Dispute) {
        if let Some(status) = self.status {
            dispute.status = status;
        }
        if let Some(description) = self.description {
            dispute.description = description;
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DisputeResponse {
    pub dispute: Dispute,
}

#[derive(Debug, Serialize)]
pub struct DisputesResponse {
    pub disputes: Vec<Dispute>,
}
