use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        market::{CreateMarketPriceDto, MarketPriceQuery, UpdateMarketPriceDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::market::{CreateMarketPriceParams, MarketPrice, UpdateMarketPriceParams},
        service::market::MarketPriceService,
        state::AppState,
    },
};

/// GET /market - List market prices, optionally filtered by `item`
pub async fn get_prices(
    State(state): State<AppState>,
    Query(query): Query<MarketPriceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let prices = MarketPriceService::new(&state.db)
        .get_all(query.item.as_deref())
        .await?;
    let prices: Vec<_> = prices.into_iter().map(MarketPrice::into_dto).collect();

    Ok((StatusCode::OK, Json(prices)))
}

pub async fn get_price(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let price = MarketPriceService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Market price {} not found", id)))?;

    Ok((StatusCode::OK, Json(price.into_dto())))
}

/// POST /market - Record a price (admin only)
pub async fn create_price(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMarketPriceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let price = MarketPriceService::new(&state.db)
        .create(CreateMarketPriceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(price.into_dto())))
}

pub async fn update_price(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMarketPriceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let price = MarketPriceService::new(&state.db)
        .update(id, UpdateMarketPriceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(price.into_dto())))
}

pub async fn delete_price(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    MarketPriceService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Market price deleted".to_string(),
        }),
    ))
}
