//! Review handlers.

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use chrono::Utc;
use log::info;

use agrimandi_commons::{Review, ReviewId, UserId};
use agrimandi_store::EntityStore;

use crate::error::ApiResult;
use crate::models::reviews::{CreateReviewRequest, ReviewResponse, ReviewsResponse};
use crate::state::AppState;

/// GET /v1/api/reviews/{userId} - every review targeting one user.
#[get("/reviews/{userId}")]
pub async fn list_reviews(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let reviewee_id = UserId::new(path.into_inner());
    let reviews = state.reviews.for_reviewee(&reviewee_id)?;

    Ok(HttpResponse::Ok().json(ReviewsResponse { reviews }))
}

/// POST /v1/api/reviews - leave a review, then refresh the reviewee's mean
/// rating.
///
/// The recompute is read-modify-write without a transaction; concurrent
/// submissions can lose one average update. The review record itself is
/// never lost.
#[post("/reviews")]
pub async fn create_review(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreateReviewRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let body = body.into_inner();
    let rating = body.validate()?;

    let profile = state.profile_of(&identity)?;

    let review = Review {
        id: ReviewId::generate(),
        order_id: body.order_id,
        reviewer_id: identity.user_id.clone(),
        reviewer_name: profile
            .map(|p| p.name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| identity.email.clone()),
        reviewee_id: body.reviewee_id.clone(),
        rating,
        comment: body.comment,
        created_at: Utc::now(),
    };

    state.reviews.put(&review.key(), &review)?;

    // Refresh the reviewee's aggregate rating when they have a profile.
    if let Some(mut reviewee) = state.users.get(&body.reviewee_id)? {
        let reviews = state.reviews.for_reviewee(&body.reviewee_id)?;
        if !reviews.is_empty() {
            let sum: u64 = reviews.iter().map(|r| r.rating as u64).sum();
            reviewee.rating = sum as f64 / reviews.len() as f64;
            state.users.put(&reviewee.id.clone(), &reviewee)?;
        }
    }

    info!(
        "review {} left by {} for {}",
        review.id, identity.user_id, review.reviewee_id
    );

    Ok(HttpResponse::Ok().json(ReviewResponse { review }))
}
