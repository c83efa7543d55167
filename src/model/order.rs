use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDto {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    pub items: Vec<OrderLineDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub product_id: i32,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub total: f64,
    /// `Pending` or `Paid`.
    pub status: String,
    pub payment_id: Option<i32>,
    pub items: Vec<OrderItemDto>,
    pub created_at: DateTime<Utc>,
}
