//! Dispute handlers.

use actix_web::{get, patch, post, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::info;

use agrimandi_commons::{Dispute, DisputeId, DisputeStatus};
use agrimandi_store::EntityStore;

use crate::error::{ApiError, ApiResult};
use crate::models::disputes::{
    CreateDisputeRequest, DisputePatchRequest, DisputeResponse, DisputesResponse,
};
use crate::state::AppState;

/// GET /v1/api/disputes - admins see everything, others only what they
/// raised.
#[get("/disputes")]
pub async fn list_disputes(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;

    let is_admin = state
        .profile_of(&identity)?
        .map(|p| p.is_admin())
        .unwrap_or(false);

    let disputes = if is_admin {
        state.disputes.all()?
    } else {
        state.disputes.raised_by(&identity.user_id)?
    };

    Ok(HttpResponse::Ok().json(DisputesResponse { disputes }))
}

/// POST /v1/api/disputes - raise a dispute against an order.
#[post("/disputes")]
pub async fn create_dispute(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateDisputeRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let body = body.into_inner();
    body.validate()?;

    let profile = state.profile_of(&identity)?;

    let dispute = Dispute {
        id: DisputeId::generate(),
        order_id: body.order_id,
        raised_by: identity.user_id.clone(),
        raised_by_name: profile
            .map(|p| p.name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| identity.email.clone()),
        reason: body.reason,
        description: body.description,
        status: DisputeStatus::Open,
        created_at: Utc::now(),
    };

    state.disputes.put(&dispute.id.clone(), &dispute)?;
    info!(
        "dispute {} raised by {} on order {}",
        dispute.id, identity.user_id, dispute.order_id
    );

    Ok(HttpResponse::Ok().json(DisputeResponse { dispute }))
}

/// PATCH /v1/api/disputes/{id} - admin resolution patch.
#[patch("/disputes/{id}")]
pub async fn update_dispute(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<DisputePatchRequest>,
) -> ApiResult<HttpResponse> {
    let admin = state.require_admin(&req)?;
    let id = DisputeId::new(path.into_inner());

    let mut dispute = state
        .disputes
        .get(&id)?
        .ok_or_else(|| ApiError::not_found("Dispute not found"))?;

    body.into_inner().apply(&mut dispute);
    state.disputes.put(&id, &dispute)?;
    info!("dispute {} patched by admin {}", id, admin.user_id);

    Ok(HttpResponse::Ok().json(DisputeResponse { dispute }))
}
