use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        land::{CreateLandDto, UpdateLandDto},
    },
    server::{
        error::AppError,
        middleware::auth::{ensure, AuthGuard, Permission},
        model::{
            land::{CreateLandParams, Land, UpdateLandParams},
            user::User,
        },
        service::land::LandService,
        state::AppState,
        util::upload::MultipartForm,
    },
};

/// Loads a land and checks the caller owns it or is an admin.
async fn owned_land(service: &LandService<'_>, user: &User, id: i32) -> Result<Land, AppError> {
    let land = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Land {} not found", id)))?;

    ensure(user, &Permission::OwnerOrAdmin(land.owner_id))?;

    Ok(land)
}

/// POST /lands - Register a land parcel for the caller
///
/// The external `landId` is generated by the server.
///
/// # Returns
/// - `201 Created` - The registered land
/// - `400 Bad Request` - Missing field or non-positive size
/// - `401 Unauthorized` - Not authenticated
pub async fn create_land(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLandDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = LandService::new(&state.db);
    let land = service
        .create(user.id, CreateLandParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(land.into_dto())))
}

/// GET /lands - List the caller's lands; admins see every land
pub async fn get_lands(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let owner = (!user.is_admin()).then_some(user.id);
    let lands = LandService::new(&state.db).get_all(owner).await?;

    let lands: Vec<_> = lands.into_iter().map(Land::into_dto).collect();

    Ok((StatusCode::OK, Json(lands)))
}

pub async fn get_land(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = LandService::new(&state.db);
    let land = owned_land(&service, &user, id).await?;

    Ok((StatusCode::OK, Json(land.into_dto())))
}

pub async fn update_land(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLandDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = LandService::new(&state.db);
    let land = owned_land(&service, &user, id).await?;
    let land = service
        .update(land.id, UpdateLandParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(land.into_dto())))
}

pub async fn delete_land(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = LandService::new(&state.db);
    let land = owned_land(&service, &user, id).await?;
    service.delete(&land, &state.storage).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Land deleted".to_string(),
        }),
    ))
}

/// POST /lands/{id}/photo - Upload a parcel photo
///
/// Expects a multipart form with a `photo` file field.
pub async fn upload_land_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = LandService::new(&state.db);
    let land = owned_land(&service, &user, id).await?;

    let mut form = MultipartForm::read(multipart).await?;
    let photo = form.required_file("photo")?;

    let land = service.set_photo(&land, &state.storage, photo).await?;

    Ok((StatusCode::OK, Json(land.into_dto())))
}
