use chrono::{DateTime, Utc};

use crate::model::market::{CreateMarketPriceDto, MarketPriceDto, UpdateMarketPriceDto};

/// Price observed for an item at a market.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketPrice {
    pub id: i32,
    pub item_name: String,
    pub category: String,
    pub market: String,
    /// Unit the price applies to, e.g. "kg".
    pub unit: String,
    pub price: f64,
    pub recorded_at: DateTime<Utc>,
}

impl MarketPrice {
    pub fn from_entity(entity: entity::market_price::Model) -> Self {
        Self {
            id: entity.id,
            item_name: entity.item_name,
            category: entity.category,
            market: entity.market,
            unit: entity.unit,
            price: entity.price,
            recorded_at: entity.recorded_at,
        }
    }

    pub fn into_dto(self) -> MarketPriceDto {
        MarketPriceDto {
            id: self.id,
            item_name: self.item_name,
            category: self.category,
            market: self.market,
            unit: self.unit,
            price: self.price,
            recorded_at: self.recorded_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMarketPriceParams {
    pub item_name: String,
    pub category: String,
    pub market: String,
    pub unit: String,
    pub price: f64,
}

impl CreateMarketPriceParams {
    pub fn from_dto(dto: CreateMarketPriceDto) -> Self {
        Self {
            item_name: dto.item_name,
            category: dto.category,
            market: dto.market,
            unit: dto.unit,
            price: dto.price,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMarketPriceParams {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub market: Option<String>,
    pub unit: Option<String>,
    pub price: Option<f64>,
}

impl UpdateMarketPriceParams {
    pub fn from_dto(dto: UpdateMarketPriceDto) -> Self {
        Self {
            item_name: dto.item_name,
            category: dto.category,
            market: dto.market,
            unit: dto.unit,
            price: dto.price,
        }
    }
}
