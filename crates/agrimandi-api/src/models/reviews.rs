//! Review endpoint payloads.

use serde::{Deserialize, Serialize};

use agrimandi_commons::{OrderId, Review, UserId};

use crate::error::{ApiError, ApiResult};

/// Body of `POST /reviews`. Rating must be an integer number of stars in
/// [1, 5].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub order_id: OrderId,
    pub reviewee_id: UserId,
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}

impl CreateReviewRequest {
    pub fn validate(&self) -> ApiResult<u8> {
        if self.order_id.as_str().trim().is_empty()
            || self.reviewee_id.as_str().trim().is_empty()
        {
            return Err(ApiError::validation("Order ID, reviewee, and rating required"));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(ApiError::validation("Rating must be between 1 and 5"));
        }
        Ok(self.rating as u8)
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: Review,
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
}
