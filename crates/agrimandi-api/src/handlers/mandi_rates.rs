//! Mandi rate handlers: public lookup plus the admin seed route.

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use log::info;

use agrimandi_commons::{MandiRate, RateId};

use crate::error::ApiResult;
use crate::models::mandi_rates::{RateQuery, RatesResponse, SeedResponse};
use crate::state::AppState;

/// GET /v1/api/mandi-rates - public reference rates with optional filters.
#[get("/mandi-rates")]
pub async fn list_rates(
    state: web::Data<AppState>,
    query: web::Query<RateQuery>,
) -> ApiResult<HttpResponse> {
    let rates = state
        .rates
        .all()?
        .into_iter()
        .filter(|r| query.matches(r))
        .collect();

    Ok(HttpResponse::Ok().json(RatesResponse { rates }))
}

/// POST /v1/api/admin/seed-mandi-rates - load the reference rate set in one
/// atomic batch.
#[post("/admin/seed-mandi-rates")]
pub async fn seed_rates(req: HttpRequest, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let identity = state.require_admin(&req)?;

    let count = state.rates.seed(reference_rates())?;
    info!("{} mandi rates seeded by {}", count, identity.user_id);

    Ok(HttpResponse::Ok().json(SeedResponse {
        success: true,
        count,
    }))
}

/// The published reference set loaded by the seed route.
///
/// Ids are fixed per row so that re-running the seed overwrites the same
/// five keys instead of appending duplicates.
fn reference_rates() -> Vec<MandiRate> {
    let rows = [
        ("1", "Wheat", "Azadpur Mandi", "Delhi", 2125.0, 2.5),
        ("2", "Rice", "Karnal Mandi", "Haryana", 2850.0, -1.2),
        ("3", "Tomato", "Koyambedu Market", "Tamil Nadu", 18.0, 15.5),
        ("4", "Onion", "Lasalgaon Mandi", "Maharashtra", 22.0, -8.3),
        ("5", "Potato", "Agra Mandi", "Uttar Pradesh", 12.0, 0.0),
    ];

    rows.iter()
        .map(|(id, crop, mandi, state, govt_rate, change)| MandiRate {
            id: RateId::new(*id),
            crop: crop.to_string(),
            mandi: mandi.to_string(),
            state: state.to_string(),
            govt_rate: *govt_rate,
            date: "2025-10-19".to_string(),
            change: *change,
        })
        .collect()
}
