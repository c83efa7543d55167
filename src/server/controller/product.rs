use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        product::{CreateProductDto, ProductDto, ProductQuery, UpdateProductDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::product::{CreateProductParams, Product, UpdateProductParams},
        service::product::ProductService,
        state::AppState,
        util::upload::MultipartForm,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// List marketplace products.
///
/// Public. Optionally filtered by category.
///
/// # Returns
/// - `200 OK` - Products ordered by name
/// - `400 Bad Request` - Unknown category
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(ProductQuery),
    responses(
        (status = 200, description = "Products in the catalogue", body = Vec<ProductDto>),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let products = service.get_all(query.category.as_deref()).await?;
    let products: Vec<_> = products.into_iter().map(Product::into_dto).collect();

    Ok((StatusCode::OK, Json(products)))
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let product = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Create a product.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalogue
///
/// # Returns
/// - `201 Created` - The new product
/// - `400 Bad Request` - Missing name, unknown category, negative stock or price
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not an admin
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Successfully created product", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ProductService::new(&state.db);

    let params = CreateProductParams::from_dto(payload)?;
    let product = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Update a product.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalogue
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Successfully updated product", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ProductService::new(&state.db);

    let params = UpdateProductParams::from_dto(payload)?;
    let product = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Delete a product and its image.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalogue
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted product", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ProductService::new(&state.db);
    service.delete(id, &state.storage).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Product deleted".to_string(),
        }),
    ))
}

/// Upload a product image.
///
/// Expects a multipart form with an `image` file field (PNG, JPEG or WebP, up to 5 MiB).
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalogue
#[utoipa::path(
    post,
    path = "/api/products/{id}/image",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Image stored", body = ProductDto),
        (status = 400, description = "Missing, oversized or unsupported image", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_product_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let mut form = MultipartForm::read(multipart).await?;
    let image = form.required_file("image")?;

    let service = ProductService::new(&state.db);
    let product = service.set_image(id, &state.storage, image).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}
