//! Mandi rate endpoint payloads.

use serde::{Deserialize, Serialize};

use agrimandi_commons::MandiRate;

/// Query parameters for `GET /mandi-rates`. Crop and mandi are
/// case-insensitive containment matches; date is exact.
#[derive(Debug, Deserialize)]
pub struct RateQuery {
    pub crop: Option<String>,
    pub mandi: Option<String>,
    pub date: Option<String>,
}

impl RateQuery {
    pub fn matches(&self, rate: &MandiRate) -> bool {
        if let Some(crop) = &self.crop {
            if !rate.crop.to_lowercase().contains(&crop.to_lowercase()) {
                return false;
            }
        }
        if let Some(mandi) = &self.mandi {
            if !rate.mandi.to_lowercase().contains(&mandi.to_lowercase()) {
                return false;
            }
        }
        if let Some(date) = &self.date {
            if &rate.date != date {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Serialize)]
pub struct RatesResponse {
    pub rates: Vec<MandiRate>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    pub count: usize,
}
