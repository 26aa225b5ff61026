//! Government-published mandi reference rates.

use serde::{Deserialize, Serialize};

use crate::ids::RateId;

/// Reference price for a crop at a regulated wholesale market.
///
/// Admin-seeded, read-mostly data. `change` is the day-over-day percentage
/// movement as published.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandiRate {
    pub id: RateId,
    pub crop: String,
    pub mandi: String,
    pub state: String,
    pub govt_rate: f64,
    /// Publication date, `YYYY-MM-DD` as issued by the board.
    pub date: String,
    pub change: f64,
}
