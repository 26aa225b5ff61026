//! Admin handlers: user moderation and the analytics dashboard.

use actix_web::{get, patch, web, HttpRequest, HttpResponse};
use log::info;

use agrimandi_commons::{ListingStatus, Role, UserId};
use agrimandi_store::EntityStore;

use crate::error::{ApiError, ApiResult};
use crate::models::admin::{AdminUserPatch, Analytics, AnalyticsResponse};
use crate::models::listings::ListingsResponse;
use crate::models::users::{UserResponse, UsersResponse};
use crate::state::AppState;

/// GET /v1/api/admin/users - every stored profile.
#[get("/admin/users")]
pub async fn list_users(req: HttpRequest, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    state.require_admin(&req)?;
    let users = state.users.all()?;

    Ok(HttpResponse::Ok().json(UsersResponse { users }))
}

/// GET /v1/api/admin/listings - every listing, any status, unfiltered.
#[get("/admin/listings")]
pub async fn list_listings(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    state.require_admin(&req)?;
    let listings = state.listings.all()?;

    Ok(HttpResponse::Ok().json(ListingsResponse { listings }))
}

/// PATCH /v1/api/admin/users/{id} - moderation patch over verified/role.
#[patch("/admin/users/{id}")]
pub async fn update_user(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<AdminUserPatch>,
) -> ApiResult<HttpResponse> {
    let admin = state.require_admin(&req)?;
    let id = UserId::new(path.into_inner());

    let mut user = state
        .users
        .get(&id)?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    body.into_inner().apply(&mut user);
    state.users.put(&id, &user)?;
    info!("user {} patched by admin {}", id, admin.user_id);

    Ok(HttpResponse::Ok().json(UserResponse { user }))
}

/// GET /v1/api/admin/analytics - full-scan aggregates, recomputed per call.
#[get("/admin/analytics")]
pub async fn analytics(req: HttpRequest, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    state.require_admin(&req)?;

    let users = state.users.all()?;
    let listings = state.listings.all()?;
    let mut orders = state.orders.all()?;

    let total_orders = orders.len();
    let total_revenue = orders.iter().map(|o| o.total_amount).sum();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders.truncate(10);

    let analytics = Analytics {
        total_users: users.len(),
        total_suppliers: users.iter().filter(|u| u.role == Role::Supplier).count(),
        total_buyers: users.iter().filter(|u| u.role == Role::Buyer).count(),
        total_listings: listings.len(),
        active_listings: listings
            .iter()
            .filter(|l| l.status == ListingStatus::Published)
            .count(),
        total_orders,
        total_revenue,
        total_messages: state.messages.count()?,
        recent_orders: orders,
    };

    Ok(HttpResponse::Ok().json(AnalyticsResponse { analytics }))
}
