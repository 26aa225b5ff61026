//! Order handlers.
//!
//! Orders are visible only to their two parties; status changes run
//! through the state machine on `OrderStatus`.

use actix_web::{get, patch, post, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::info;

use agrimandi_commons::{Order, OrderId, OrderStatus};
use agrimandi_store::EntityStore;

use crate::error::{ApiError, ApiResult};
use crate::models::orders::{CreateOrderRequest, OrderPatchRequest, OrderResponse, OrdersResponse};
use crate::state::AppState;

/// GET /v1/api/orders - orders where the caller is buyer or supplier.
#[get("/orders")]
pub async fn list_orders(req: HttpRequest, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let orders = state.orders.for_party(&identity.user_id)?;

    Ok(HttpResponse::Ok().json(OrdersResponse { orders }))
}

/// POST /v1/api/orders - place an inquiry against a listing.
///
/// Pricing fields are copied off the listing at creation; the total never
/// follows later listing edits.
#[post("/orders")]
pub async fn create_order(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateOrderRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let body = body.into_inner();
    body.validate()?;

    let listing = state
        .listings
        .get(&body.listing_id)?
        .ok_or_else(|| ApiError::not_found("Listing not found"))?;

    let profile = state.profile_of(&identity)?;

    let order = Order {
        id: OrderId::generate(),
        listing_id: listing.id.clone(),
        buyer_id: identity.user_id.clone(),
        buyer_name: profile
            .map(|p| p.name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| identity.email.clone()),
        supplier_id: listing.supplier_id.clone(),
        crop: listing.crop.clone(),
        quantity: body.quantity,
        unit: listing.unit.clone(),
        unit_price: listing.price_per_unit,
        total_amount: listing.price_per_unit * body.quantity as f64,
        status: OrderStatus::Inquiry,
        message: body.message,
        created_at: Utc::now(),
    };

    state.orders.put(&order.id.clone(), &order)?;
    info!(
        "order {} placed by {} on listing {}",
        order.id, identity.user_id, listing.id
    );

    Ok(HttpResponse::Ok().json(OrderResponse { order }))
}

/// PATCH /v1/api/orders/{id} - party-only status/message patch.
#[patch("/orders/{id}")]
pub async fn update_order(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<OrderPatchRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let id = OrderId::new(path.into_inner());

    let mut order = state
        .orders
        .get(&id)?
        .ok_or_else(|| ApiError::not_found("Order not found"))?;

    if order.buyer_id != identity.user_id && order.supplier_id != identity.user_id {
        return Err(ApiError::forbidden("Forbidden - not your order"));
    }

    body.into_inner().apply(&mut order)?;
    state.orders.put(&id, &order)?;

    Ok(HttpResponse::Ok().json(OrderResponse { order }))
}
