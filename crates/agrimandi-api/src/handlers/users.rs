//! Profile handlers.

use actix_web::{get, put, web, HttpRequest, HttpResponse};
use log::info;

use agrimandi_commons::UserId;
use agrimandi_store::EntityStore;

use crate::error::{ApiError, ApiResult};
use crate::models::users::{
    ProfileResponse, ProfileView, PublicProfileResponse, UpdateProfileRequest, UserResponse,
};
use crate::state::AppState;

/// GET /v1/api/users/me - the caller's own profile.
///
/// Falls back to the bare token identity when no profile record exists.
#[get("/users/me")]
pub async fn get_me(req: HttpRequest, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;

    let user = match state.profile_of(&identity)? {
        Some(profile) => ProfileView::Full(profile),
        None => ProfileView::Fallback {
            id: identity.user_id,
            email: identity.email,
        },
    };

    Ok(HttpResponse::Ok().json(ProfileResponse { user }))
}

/// PUT /v1/api/users/me - patch the caller's profile, creating it on first
/// call.
#[put("/users/me")]
pub async fn update_me(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<UpdateProfileRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let body = body.into_inner();

    let user = match state.profile_of(&identity)? {
        Some(mut profile) => {
            body.apply(&mut profile);
            profile
        }
        None => {
            info!("creating profile for {}", identity.user_id);
            body.into_new_profile(identity.user_id.clone(), identity.email.clone())
        }
    };

    state.users.put(&user.id.clone(), &user)?;

    Ok(HttpResponse::Ok().json(UserResponse { user }))
}

/// GET /v1/api/users/{id} - public, redacted view of any profile.
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    let user = state
        .users
        .get(&id)?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(PublicProfileResponse { user: user.into() }))
}
