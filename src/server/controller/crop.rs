use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        crop::{CreateCropDto, UpdateCropDto},
    },
    server::{
        error::AppError,
        middleware::auth::{ensure, AuthGuard, Permission},
        model::{
            crop::{CreateCropParams, Crop, UpdateCropParams},
            user::User,
        },
        service::crop::CropService,
        state::AppState,
    },
};

async fn owned_crop(service: &CropService<'_>, user: &User, id: i32) -> Result<Crop, AppError> {
    let crop = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Crop entry {} not found", id)))?;

    ensure(user, &Permission::OwnerOrAdmin(crop.user_id))?;

    Ok(crop)
}

/// POST /crops - Start tracking a crop for the caller
///
/// # Returns
/// - `201 Created` - The crop entry
/// - `400 Bad Request` - Missing field, or expected harvest before planting
/// - `401 Unauthorized` - Not authenticated
pub async fn create_crop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCropDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let crop = CropService::new(&state.db)
        .create(user.id, CreateCropParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(crop.into_dto())))
}

/// GET /crops - List the caller's crops; admins see every entry
pub async fn get_crops(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let owner = (!user.is_admin()).then_some(user.id);
    let crops = CropService::new(&state.db).get_all(owner).await?;
    let crops: Vec<_> = crops.into_iter().map(Crop::into_dto).collect();

    Ok((StatusCode::OK, Json(crops)))
}

pub async fn get_crop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let crop = owned_crop(&CropService::new(&state.db), &user, id).await?;

    Ok((StatusCode::OK, Json(crop.into_dto())))
}

/// PUT /crops/{id} - Update growth details or record the harvest
pub async fn update_crop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCropDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = CropService::new(&state.db);
    let crop = owned_crop(&service, &user, id).await?;
    let crop = service
        .update(&crop, UpdateCropParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(crop.into_dto())))
}

pub async fn delete_crop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = CropService::new(&state.db);
    let crop = owned_crop(&service, &user, id).await?;
    service.delete(crop.id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Crop entry deleted".to_string(),
        }),
    ))
}
