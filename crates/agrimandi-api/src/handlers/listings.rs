//! Listing handlers: public browse/search plus supplier-owned CRUD.

use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::info;

use agrimandi_commons::{Listing, ListingId, ListingStatus, UserId};
use agrimandi_store::EntityStore;

use crate::error::{ApiError, ApiResult};
use crate::models::listings::{
    CreateListingRequest, ListingQuery, ListingResponse, ListingsResponse, UpdateListingRequest,
};
use crate::models::SuccessResponse;
use crate::state::AppState;

/// GET /v1/api/listings - browse published listings with optional filters.
#[get("/listings")]
pub async fn list_listings(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> ApiResult<HttpResponse> {
    let listings = state
        .listings
        .all()?
        .into_iter()
        .filter(|l| query.matches(l))
        .collect();

    Ok(HttpResponse::Ok().json(ListingsResponse { listings }))
}

/// GET /v1/api/listings/{id}
#[get("/listings/{id}")]
pub async fn get_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = ListingId::new(path.into_inner());
    let listing = state
        .listings
        .get(&id)?
        .ok_or_else(|| ApiError::not_found("Listing not found"))?;

    Ok(HttpResponse::Ok().json(ListingResponse { listing }))
}

/// POST /v1/api/listings - create a listing as the authenticated supplier.
///
/// The caller's profile is snapshotted onto the listing's supplier fields;
/// later profile edits do not flow back into existing listings.
#[post("/listings")]
pub async fn create_listing(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateListingRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let body = body.into_inner();
    body.validate()?;

    let profile = state.profile_of(&identity)?;
    let now = Utc::now();

    let listing = Listing {
        id: ListingId::generate(),
        supplier_id: identity.user_id.clone(),
        supplier_name: profile
            .as_ref()
            .map(|p| p.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| identity.email.clone()),
        supplier_rating: profile.as_ref().map(|p| p.rating).unwrap_or(0.0),
        supplier_verified: profile.as_ref().map(|p| p.verified).unwrap_or(false),
        supplier_location: profile
            .as_ref()
            .map(|p| p.location.clone())
            .unwrap_or_default(),
        crop: body.crop,
        grade: body.grade.unwrap_or_else(|| "Standard".to_string()),
        quantity: body.quantity,
        unit: body.unit.unwrap_or_else(|| "kg".to_string()),
        price_per_unit: body.price_per_unit,
        mandi: body.mandi,
        packaging: body.packaging.unwrap_or_default(),
        harvest_date: body.harvest_date.unwrap_or(now),
        images: body.images.unwrap_or_default(),
        certification: body.certification.unwrap_or_default(),
        description: body.description.unwrap_or_default(),
        status: ListingStatus::Published,
        created_at: now,
    };

    state.listings.put(&listing.id.clone(), &listing)?;
    info!("listing {} created by {}", listing.id, identity.user_id);

    Ok(HttpResponse::Ok().json(ListingResponse { listing }))
}

/// PUT /v1/api/listings/{id} - owner-only patch.
#[put("/listings/{id}")]
pub async fn update_listing(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateListingRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let id = ListingId::new(path.into_inner());

    let mut listing = state
        .listings
        .get(&id)?
        .ok_or_else(|| ApiError::not_found("Listing not found"))?;

    if listing.supplier_id != identity.user_id {
        return Err(ApiError::forbidden("Forbidden - not your listing"));
    }

    body.into_inner().apply(&mut listing);
    state.listings.put(&id, &listing)?;

    Ok(HttpResponse::Ok().json(ListingResponse { listing }))
}

/// DELETE /v1/api/listings/{id} - owner-only hard delete.
#[delete("/listings/{id}")]
pub async fn delete_listing(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let id = ListingId::new(path.into_inner());

    let listing = state
        .listings
        .get(&id)?
        .ok_or_else(|| ApiError::not_found("Listing not found"))?;

    if listing.supplier_id != identity.user_id {
        return Err(ApiError::forbidden("Forbidden - not your listing"));
    }

    state.listings.delete(&id)?;
    info!("listing {} deleted by {}", id, identity.user_id);

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// GET /v1/api/suppliers/{id}/listings - all of one supplier's listings,
/// any status.
#[get("/suppliers/{id}/listings")]
pub async fn supplier_listings(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let supplier_id = UserId::new(path.into_inner());
    let listings = state.listings.by_supplier(&supplier_id)?;

    Ok(HttpResponse::Ok().json(ListingsResponse { listings }))
}
