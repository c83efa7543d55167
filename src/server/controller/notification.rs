use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::notification::CreateNotificationDto,
    server::{
        error::AppError,
        middleware::auth::{ensure, AuthGuard, Permission},
        model::notification::{CreateNotificationParams, Notification},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// GET /api/notifications/{recipient} - List notifications for a recipient
///
/// Recipients are free-form strings. A user may read the feed addressed to their own
/// user ID; admins may read any feed.
///
/// # Returns
/// - `200 OK` - Notifications, newest first
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Feed belongs to someone else
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(recipient): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match recipient.trim().parse::<i32>() {
        Ok(owner_id) => ensure(&user, &Permission::OwnerOrAdmin(owner_id))?,
        Err(_) => ensure(&user, &Permission::Admin)?,
    }

    let notifications = NotificationService::new(&state.db)
        .get_by_recipient(recipient.trim())
        .await?;
    let notifications: Vec<_> = notifications
        .into_iter()
        .map(Notification::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(notifications)))
}

/// POST /api/notifications - Send a notification (admin only)
pub async fn create_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let notification = NotificationService::new(&state.db)
        .create(CreateNotificationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}
