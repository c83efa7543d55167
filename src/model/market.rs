use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketPriceDto {
    pub id: i32,
    pub item_name: String,
    pub category: String,
    pub market: String,
    pub unit: String,
    pub price: f64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMarketPriceDto {
    pub item_name: String,
    pub category: String,
    pub market: String,
    pub unit: String,
    pub price: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMarketPriceDto {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub market: Option<String>,
    pub unit: Option<String>,
    pub price: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct MarketPriceQuery {
    /// Case-insensitive substring match on the item name.
    pub item: Option<String>,
}
