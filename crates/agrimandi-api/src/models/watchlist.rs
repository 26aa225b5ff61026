//! Watchlist endpoint payloads.

use serde::{Deserialize, Serialize};

use agrimandi_commons::{WatchKind, WatchlistItem};

/// Body of `POST /watchlist`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWatchRequest {
    #[serde(rename = "type")]
    pub kind: WatchKind,
    pub item_id: Option<String>,
    pub crop: Option<String>,
    pub mandi: Option<String>,
    pub target_price: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct WatchItemResponse {
    pub item: WatchlistItem,
}

#[derive(Debug, Serialize)]
pub struct WatchItemsResponse {
    pub items: Vec<WatchlistItem>,
}
