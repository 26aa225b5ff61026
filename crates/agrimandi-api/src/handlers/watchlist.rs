//! Watchlist handlers.
//!
//! Every key is built from the authenticated caller's id, so one user's
//! items are structurally unreachable from another user's requests.

use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use chrono::Utc;

use agrimandi_commons::{WatchId, WatchlistItem, WatchlistKey};
use agrimandi_store::EntityStore;

use crate::error::{ApiError, ApiResult};
use crate::models::watchlist::{AddWatchRequest, WatchItemResponse, WatchItemsResponse};
use crate::models::SuccessResponse;
use crate::state::AppState;

/// GET /v1/api/watchlist - the caller's items only.
#[get("/watchlist")]
pub async fn list_watchlist(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let items = state.watchlist.for_user(&identity.user_id)?;

    Ok(HttpResponse::Ok().json(WatchItemsResponse { items }))
}

/// POST /v1/api/watchlist
#[post("/watchlist")]
pub async fn add_watch(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<AddWatchRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let body = body.into_inner();

    let item = WatchlistItem {
        id: WatchId::generate(),
        user_id: identity.user_id,
        kind: body.kind,
        item_id: body.item_id,
        crop: body.crop,
        mandi: body.mandi,
        target_price: body.target_price,
        created_at: Utc::now(),
    };

    state.watchlist.put(&item.key(), &item)?;

    Ok(HttpResponse::Ok().json(WatchItemResponse { item }))
}

/// DELETE /v1/api/watchlist/{id} - deletes under the caller's own prefix.
#[delete("/watchlist/{id}")]
pub async fn remove_watch(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let key = WatchlistKey::new(identity.user_id, WatchId::new(path.into_inner()));

    state
        .watchlist
        .get(&key)?
        .ok_or_else(|| ApiError::not_found("Watchlist item not found"))?;

    state.watchlist.delete(&key)?;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
