//! Listing endpoint payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agrimandi_commons::{Listing, ListingStatus};

use crate::error::{ApiError, ApiResult};

/// Query parameters for `GET /listings`.
///
/// `status` defaults to published; the literal `all` bypasses the status
/// filter, and `all` for crop/grade means "no filter" (the frontend sends
/// it for the default dropdown position).
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub crop: Option<String>,
    pub mandi: Option<String>,
    pub grade: Option<String>,
    pub status: Option<String>,
}

impl ListingQuery {
    /// Applies the filters the way the browse page expects.
    pub fn matches(&self, listing: &Listing) -> bool {
        let status = self.status.as_deref().unwrap_or("published");
        if status != "all" {
            let listing_status = match listing.status {
                ListingStatus::Published => "published",
                ListingStatus::Pending => "pending",
                ListingStatus::Closed => "closed",
            };
            if listing_status != status {
                return false;
            }
        }

        if let Some(crop) = self.crop.as_deref() {
            if crop != "all" && listing.crop != crop {
                return false;
            }
        }
        if let Some(mandi) = self.mandi.as_deref() {
            if mandi != "all" && !listing.mandi.contains(mandi) {
                return false;
            }
        }
        if let Some(grade) = self.grade.as_deref() {
            if grade != "all" && listing.grade != grade {
                return false;
            }
        }
        true
    }
}

/// Body of `POST /listings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub crop: String,
    pub grade: Option<String>,
    pub quantity: u64,
    pub unit: Option<String>,
    pub price_per_unit: f64,
    pub mandi: String,
    pub packaging: Option<String>,
    pub harvest_date: Option<DateTime<Utc>>,
    pub images: Option<Vec<String>>,
    pub certification: Option<String>,
    pub description: Option<String>,
}

impl CreateListingRequest {
    pub fn validate(&self) -> ApiResult<()> {
        if self.crop.trim().is_empty() || self.mandi.trim().is_empty() {
            return Err(ApiError::validation("Required fields missing"));
        }
        if self.quantity == 0 {
            return Err(ApiError::validation("Quantity must be positive"));
        }
        if self.price_per_unit <= 0.0 {
            return Err(ApiError::validation("Price per unit must be positive"));
        }
        Ok(())
    }
}

/// Body of `PUT /listings/{id}`: a partial patch merged over the stored
/// record. The supplier identity and snapshot fields are not patchable.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingRequest {
    pub crop: Option<String>,
    pub grade: Option<String>,
    pub quantity: Option<u64>,
    pub unit: Option<String>,
    pub price_per_unit: Option<f64>,
    pub mandi: Option<String>,
    pub packaging: Option<String>,
    pub harvest_date: Option<DateTime<Utc>>,
    pub images: Option<Vec<String>>,
    pub certification: Option<String>,
    pub description: Option<String>,
    pub status: Option<ListingStatus>,
}

impl UpdateListingRequest {
    pub fn apply(self, listing: &mut Listing) {
        if let Some(crop) = self.crop {
            listing.crop = crop;
        }
        if let Some(grade) = self.grade {
            listing.grade = grade;
        }
        if let Some(quantity) = self.quantity {
            listing.quantity = quantity;
        }
        if let Some(unit) = self.unit {
            listing.unit = unit;
        }
        if let Some(price) = self.price_per_unit {
            listing.price_per_unit = price;
        }
        if let Some(mandi) = self.mandi {
            listing.mandi = mandi;
        }
        if let Some(packaging) = self.packaging {
            listing.packaging = packaging;
        }
        if let Some(harvest_date) = self.harvest_date {
            listing.harvest_date = harvest_date;
        }
        if let Some(images) = self.images {
            listing.images = images;
        }
        if let Some(certification) = self.certification {
            listing.certification = certification;
        }
        if let Some(description) = self.description {
            listing.description = description;
        }
        if let Some(status) = self.status {
            listing.status = status;
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub listing: Listing,
}

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub listings: Vec<Listing>,
}
