//! Notification handlers, scoped per caller like the watchlist.

use actix_web::{get, patch, web, HttpRequest, HttpResponse};

use agrimandi_commons::{NotificationId, NotificationKey};
use agrimandi_store::EntityStore;

use crate::error::{ApiError, ApiResult};
use crate::models::notifications::{NotificationResponse, NotificationsResponse};
use crate::state::AppState;

/// GET /v1/api/notifications - the caller's notifications, newest first.
#[get("/notifications")]
pub async fn list_notifications(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let notifications = state.notifications.for_user(&identity.user_id)?;

    Ok(HttpResponse::Ok().json(NotificationsResponse { notifications }))
}

/// PATCH /v1/api/notifications/{id}/read
///
/// The key is built from the caller's own id, so another user's
/// notification id simply resolves to nothing.
#[patch("/notifications/{id}/read")]
pub async fn mark_notification_read(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let identity = state.authenticate(&req)?;
    let key = NotificationKey::new(identity.user_id, NotificationId::new(path.into_inner()));

    let mut notification = state
        .notifications
        .get(&key)?
        .ok_or_else(|| ApiError::not_found("Notification not found"))?;

    notification.read = true;
    state.notifications.put(&key, &notification)?;

    Ok(HttpResponse::Ok().json(NotificationResponse { notification }))
}
