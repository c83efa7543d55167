use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        billing::{BillingDto, CreateBillingDto, UpdateBillingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::billing::{Billing, CreateBillingParams, UpdateBillingParams},
        service::billing::BillingService,
        state::AppState,
    },
};

/// Tag for grouping billing endpoints in OpenAPI documentation
pub static BILLING_TAG: &str = "billing";

/// Create a billing snapshot for checkout.
///
/// Public; `userRef` is a free-form reference used to address payment notifications.
#[utoipa::path(
    post,
    path = "/api/billing",
    tag = BILLING_TAG,
    request_body = CreateBillingDto,
    responses(
        (status = 201, description = "Successfully created billing record", body = BillingDto),
        (status = 400, description = "Invalid billing data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_billing(
    State(state): State<AppState>,
    Json(payload): Json<CreateBillingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BillingService::new(&state.db);

    let billing = service
        .create(CreateBillingParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(billing.into_dto())))
}

/// List all billing records.
///
/// # Access Control
/// - `Admin` - Only admins can list billing records
#[utoipa::path(
    get,
    path = "/api/billing",
    tag = BILLING_TAG,
    responses(
        (status = 200, description = "All billing records", body = Vec<BillingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_billings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let billings = BillingService::new(&state.db).get_all().await?;
    let billings: Vec<_> = billings.into_iter().map(Billing::into_dto).collect();

    Ok((StatusCode::OK, Json(billings)))
}

/// Get a billing record by ID.
#[utoipa::path(
    get,
    path = "/api/billing/{id}",
    tag = BILLING_TAG,
    params(
        ("id" = i32, Path, description = "Billing ID")
    ),
    responses(
        (status = 200, description = "The billing record", body = BillingDto),
        (status = 404, description = "Billing record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_billing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let billing = BillingService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Billing {} not found", id)))?;

    Ok((StatusCode::OK, Json(billing.into_dto())))
}

/// Update a billing record.
#[utoipa::path(
    put,
    path = "/api/billing/{id}",
    tag = BILLING_TAG,
    params(
        ("id" = i32, Path, description = "Billing ID")
    ),
    request_body = UpdateBillingDto,
    responses(
        (status = 200, description = "Successfully updated billing record", body = BillingDto),
        (status = 400, description = "Invalid billing data", body = ErrorDto),
        (status = 404, description = "Billing record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_billing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBillingDto>,
) -> Result<impl IntoResponse, AppError> {
    let billing = BillingService::new(&state.db)
        .update(id, UpdateBillingParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(billing.into_dto())))
}

/// Delete a billing record.
///
/// Records still referenced by a payment cannot be deleted.
///
/// # Access Control
/// - `Admin` - Only admins can delete billing records
#[utoipa::path(
    delete,
    path = "/api/billing/{id}",
    tag = BILLING_TAG,
    params(
        ("id" = i32, Path, description = "Billing ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted billing record", body = MessageDto),
        (status = 400, description = "Billing record is referenced by a payment", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Billing record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_billing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    BillingService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Billing record deleted".to_string(),
        }),
    ))
}
