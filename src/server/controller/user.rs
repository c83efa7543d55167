use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::MessageDto,
        user::{
            AuthTokenDto, ForgotPasswordDto, LoginDto, RegisterUserDto, ResetPasswordDto,
            UpdateRoleDto, UpdateUserDto,
        },
    },
    server::{
        controller::pdf_response,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{RegisterUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
        util::upload::MultipartForm,
    },
};

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// POST /users/register - Create a farmer account
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Invalid field, or username/email already registered
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /users/login - Exchange credentials for a bearer token
///
/// The identifier may be either the email or the username.
///
/// # Returns
/// - `200 OK` - Token and user
/// - `401 Unauthorized` - Unknown identifier or wrong password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let (token, user) = service
        .login(&state.tokens, &payload.identifier, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AuthTokenDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// GET /users/me - Get the authenticated user
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /users - List all users, paginated
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Page of users with `page` (0-based) and `entries` per page
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not an admin
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);
    let users = service.get_paginated(params.page, params.entries).await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// GET /users/{id} - Get a user
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves or an admin
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(id)])
        .await?;

    let service = UserService::new(&state.db);
    let user = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PUT /users/{id} - Update profile fields
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves or an admin
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid field, or username/email used by another account
/// - `404 Not Found` - No user with that ID
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(id)])
        .await?;

    let service = UserService::new(&state.db);
    let user = service
        .update(id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PUT /users/{id}/role - Change a user's role
///
/// # Access Control
/// - `Admin` - Only admins can change roles
pub async fn update_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);
    let user = service.set_role(id, &payload.role).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// DELETE /users/{id} - Delete a user and their lands
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves or an admin
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(id)])
        .await?;

    let service = UserService::new(&state.db);
    service.delete(id, &state.storage).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted".to_string(),
        }),
    ))
}

/// POST /users/{id}/image - Upload a profile image
///
/// Expects a multipart form with an `image` file field.
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves or an admin
pub async fn upload_profile_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(id)])
        .await?;

    let mut form = MultipartForm::read(multipart).await?;
    let image = form.required_file("image")?;

    let service = UserService::new(&state.db);
    let user = service
        .set_profile_image(id, &state.storage, image)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /users/forgot-password - Email a password reset code
///
/// # Returns
/// - `200 OK` - Code sent
/// - `404 Not Found` - No account with that email
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);
    service
        .request_password_reset(&payload.email, &state.reset_codes, state.mailer.as_ref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "A reset code has been sent to your email".to_string(),
        }),
    ))
}

/// POST /users/reset-password - Set a new password using a reset code
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Weak password, or wrong/expired/used code
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);
    service
        .reset_password(
            &payload.email,
            &payload.code,
            &payload.new_password,
            &state.reset_codes,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password has been reset".to_string(),
        }),
    ))
}

/// GET /users/{id}/report - Render the profile report PDF
///
/// # Access Control
/// - `OwnerOrAdmin` - The user themselves or an admin
pub async fn get_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(id)])
        .await?;

    let service = UserService::new(&state.db);
    let pdf = service.render_report(id, &state.storage).await?;

    Ok(pdf_response(&format!("user-{}-report.pdf", id), pdf))
}
