use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::{CreateOrderDto, OrderDto},
    },
    server::{
        error::AppError,
        middleware::auth::{ensure, AuthGuard, Permission},
        model::order::{CreateOrderParams, Order},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order for the authenticated user.
///
/// Prices are taken from the current catalogue and the total is computed by the server.
/// Lines for the same product are merged.
///
/// # Returns
/// - `201 Created` - Pending order with its lines and total
/// - `400 Bad Request` - Empty order, unknown product, non-positive quantity or not enough stock
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully placed order", body = OrderDto),
        (status = 400, description = "Invalid order", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = OrderService::new(&state.db);
    let order = service
        .create(user.id, CreateOrderParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// List orders.
///
/// Farmers see their own orders; admins see every order. Newest first.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders visible to the caller", body = Vec<OrderDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let owner = (!user.is_admin()).then_some(user.id);
    let orders = OrderService::new(&state.db).get_all(owner).await?;

    let orders: Vec<_> = orders.into_iter().map(Order::into_dto).collect();

    Ok((StatusCode::OK, Json(orders)))
}

/// Get an order by ID.
///
/// # Access Control
/// - `OwnerOrAdmin` - The ordering user or an admin
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Order belongs to another user", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let order = OrderService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;

    ensure(&user, &Permission::OwnerOrAdmin(order.user_id))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Cancel an order.
///
/// # Access Control
/// - Owner while the order is still pending
/// - `Admin` at any time
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted order", body = MessageDto),
        (status = 400, description = "Order is no longer pending", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Order belongs to another user", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    OrderService::new(&state.db).delete(id, &user).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Order deleted".to_string(),
        }),
    ))
}
